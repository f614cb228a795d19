use confmig::{Registry, RenameTable};
use semver::Version;
use std::collections::HashSet;

fn naming_0_50_0(registry: &Registry) -> &RenameTable {
    registry.require(&Version::new(0, 50, 0)).unwrap()
}

#[test]
fn every_builtin_rule_resolves() {
    let registry = Registry::builtin().unwrap();
    for table in registry.tables() {
        for rule in table {
            assert_eq!(table.lookup(&rule.old_key), Some(rule.new_key.as_str()));
        }
    }
}

#[test]
fn builtin_old_keys_are_unique_and_not_noops() {
    let registry = Registry::builtin().unwrap();
    for table in registry.tables() {
        let olds: HashSet<&str> = table.iter().map(|r| r.old_key.as_str()).collect();
        assert_eq!(olds.len(), table.len());
        assert!(table.iter().all(|r| r.old_key != r.new_key));
    }
}

#[test]
fn style_to_naming_scenario() {
    let registry = Registry::builtin().unwrap();
    let table = naming_0_50_0(&registry);

    assert_eq!(table.lookup("Style/ConstantName"), Some("Naming/ConstantName"));
    assert_eq!(table.lookup("Style/Foo"), None);
    assert_eq!(table.lookup("Naming/ConstantName"), None);
}

#[test]
fn every_0_50_0_rule_leaves_style_for_naming() {
    let registry = Registry::builtin().unwrap();
    let table = naming_0_50_0(&registry);

    assert_eq!(table.len(), 10);
    for rule in table {
        assert!(rule.old_key.starts_with("Style/"), "{}", rule.old_key);
        assert!(rule.new_key.starts_with("Naming/"), "{}", rule.new_key);
    }
}
