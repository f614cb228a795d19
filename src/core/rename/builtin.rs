use super::RenameTable;
use crate::error::Result;
use semver::Version;

/// 0.50.0 moved the naming cops out of the Style department.
const RENAMES_0_50_0: &[(&str, &str)] = &[
    ("Style/AccessorMethodName", "Naming/AccessorMethodName"),
    ("Style/AsciiIdentifiers", "Naming/AsciiIdentifiers"),
    ("Style/OpMethod", "Naming/BinaryOperatorParameterName"),
    ("Style/ClassAndModuleCamelCase", "Naming/ClassAndModuleCamelCase"),
    ("Style/ConstantName", "Naming/ConstantName"),
    ("Style/FileName", "Naming/FileName"),
    ("Style/MethodName", "Naming/MethodName"),
    ("Style/PredicateName", "Naming/PredicateName"),
    ("Style/VariableName", "Naming/VariableName"),
    ("Style/VariableNumber", "Naming/VariableNumber"),
];

/// All tables shipped with the crate, in ascending version order.
pub fn builtin_tables() -> Result<Vec<RenameTable>> {
    Ok(vec![RenameTable::from_pairs(
        Version::new(0, 50, 0),
        RENAMES_0_50_0,
    )?])
}
