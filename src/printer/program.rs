use crate::ast::{Program, SourceFile, Unit};
use crate::config::printer::LIST_SEPARATOR;
use crate::errors::TpResult;
use crate::printer::declarations::print_decl_parts;
use crate::printer::statements::print_compound;
use crate::utils::{indent, write_line};

fn print_uses(uses: &[String]) -> String {
    if uses.is_empty() {
        return String::new();
    }
    format!("uses {};\n", uses.join(LIST_SEPARATOR))
}

pub fn print_program(program: &Program) -> TpResult<String> {
    log::debug!("printing program {}", program.name);
    let mut text = String::new();
    write_line(
        &mut text,
        format_args!(
            "program {};\n{}\n{}\n{}.\n",
            program.name,
            print_uses(&program.uses),
            print_decl_parts(&program.decls)?,
            print_compound(&program.stmt)?
        ),
    )?;
    Ok(text)
}

pub fn print_unit(unit: &Unit) -> TpResult<String> {
    log::debug!("printing unit {}", unit.name);
    let body = match &unit.init {
        Some(init) => print_compound(init)?,
        None => "end".to_string(),
    };
    let mut text = String::new();
    write_line(
        &mut text,
        format_args!(
            "unit {};\n\ninterface\n{}\n{}\n\nimplementation\n{}\n{}\n{}.\n",
            unit.name,
            indent(&print_uses(&unit.interface_uses)),
            indent(&print_decl_parts(&unit.interface)?),
            print_uses(&unit.implementation_uses),
            print_decl_parts(&unit.implementation)?,
            body
        ),
    )?;
    Ok(text)
}

pub fn print_file(file: &SourceFile) -> TpResult<String> {
    match file {
        SourceFile::Program(program) => print_program(program),
        SourceFile::Unit(unit) => print_unit(unit),
    }
}
