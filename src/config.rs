// Printer layout constants
pub mod printer {
    // One indentation level; every nested block uses it, there is no override
    pub const INDENT: &str = "    ";

    // Separators shared by list renderings
    pub const LIST_SEPARATOR: &str = ", ";
    pub const GROUP_SEPARATOR: &str = "; ";
    pub const STATEMENT_TERMINATOR: &str = ";";
}

// Real literals outside this magnitude range get a scale factor
pub mod literals {
    pub const EXPONENT_ABOVE: f64 = 1e16;
    pub const EXPONENT_BELOW: f64 = 1e-4;
}

// Input boundary
pub mod input {
    pub const TREE_EXTENSION: &str = "json";
}

// Output naming
pub mod output {
    pub const PASCAL_EXTENSION: &str = "pas";
}

// Logging defaults for the command-line tool
pub mod logging {
    pub const DEFAULT_FILTER: &str = "warn";
    pub const VERBOSE_FILTER: &str = "debug";
}

// Error messages and debugging
pub mod errors {
    pub const FORMAT_ERROR: &str = "fmt error";
}
