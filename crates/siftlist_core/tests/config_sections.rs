use siftlist_core::{ConfigError, Configuration, Section, SettingValue};

fn ui_section() -> Section {
    let mut section = Section::new();
    section.insert("font".to_string(), SettingValue::Text("Iosevka".to_string()));
    section.insert("font_size".to_string(), SettingValue::Int(12));
    section.insert("opacity".to_string(), SettingValue::Float(0.85));
    section.insert("docked".to_string(), SettingValue::Bool(false));
    section
}

#[test]
fn load_creates_a_missing_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("siftlist.conf");

    let config = Configuration::load(&path).unwrap();
    assert!(path.is_file());
    assert!(config.sections().is_empty());
}

#[test]
fn section_write_then_read_roundtrips_the_identical_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("siftlist.conf");

    let mut config = Configuration::load(&path).unwrap();
    config.add_section("ui").unwrap();
    config.set_section("ui", ui_section()).unwrap();

    assert_eq!(config.section("ui").unwrap(), &ui_section());

    // Reload from disk; the persisted document must match byte-for-byte
    // semantics, not just the in-memory copy.
    let reloaded = Configuration::load(&path).unwrap();
    assert_eq!(reloaded.section("ui").unwrap(), &ui_section());
}

#[test]
fn add_section_rejects_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Configuration::load(dir.path().join("siftlist.conf")).unwrap();

    config.add_section("ui").unwrap();
    let err = config.add_section("ui").unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateSection(name) if name == "ui"));
}

#[test]
fn missing_sections_raise_the_configuration_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Configuration::load(dir.path().join("siftlist.conf")).unwrap();

    assert!(matches!(
        config.section("ghost"),
        Err(ConfigError::MissingSection(_))
    ));
    assert!(matches!(
        config.set_section("ghost", Section::new()),
        Err(ConfigError::MissingSection(_))
    ));
    assert!(matches!(
        config.update_section("ghost", Section::new()),
        Err(ConfigError::MissingSection(_))
    ));
    assert!(matches!(
        config.reset_section("ghost"),
        Err(ConfigError::MissingSection(_))
    ));
    assert!(matches!(
        config.delete_section("ghost"),
        Err(ConfigError::MissingSection(_))
    ));
}

#[test]
fn update_section_merges_key_wise() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Configuration::load(dir.path().join("siftlist.conf")).unwrap();

    config.add_section("ui").unwrap();
    config.set_section("ui", ui_section()).unwrap();

    let mut changes = Section::new();
    changes.insert("font_size".to_string(), SettingValue::Int(14));
    changes.insert("theme".to_string(), SettingValue::Text("dark".to_string()));
    config.update_section("ui", changes).unwrap();

    let section = config.section("ui").unwrap();
    assert_eq!(section.get("font_size"), Some(&SettingValue::Int(14)));
    assert_eq!(
        section.get("theme"),
        Some(&SettingValue::Text("dark".to_string()))
    );
    assert_eq!(
        section.get("font"),
        Some(&SettingValue::Text("Iosevka".to_string()))
    );
}

#[test]
fn reset_section_empties_but_keeps_it() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = Configuration::load(dir.path().join("siftlist.conf")).unwrap();

    config.add_section("ui").unwrap();
    config.set_section("ui", ui_section()).unwrap();
    config.reset_section("ui").unwrap();

    assert!(config.has_section("ui"));
    assert!(config.section("ui").unwrap().is_empty());
}

#[test]
fn delete_section_is_permanent_across_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("siftlist.conf");

    let mut config = Configuration::load(&path).unwrap();
    config.add_section("ui").unwrap();
    config.set_section("ui", ui_section()).unwrap();
    config.add_section("window").unwrap();

    config.delete_section("ui").unwrap();
    assert!(!config.has_section("ui"));

    let reloaded = Configuration::load(&path).unwrap();
    assert!(!reloaded.has_section("ui"));
    assert!(reloaded.has_section("window"));
}

#[test]
fn reset_drops_every_section() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("siftlist.conf");

    let mut config = Configuration::load(&path).unwrap();
    config.add_section("ui").unwrap();
    config.add_section("window").unwrap();
    config.reset().unwrap();

    assert!(config.sections().is_empty());
    let reloaded = Configuration::load(&path).unwrap();
    assert!(reloaded.sections().is_empty());
}

#[test]
fn replace_swaps_the_whole_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("siftlist.conf");

    let mut config = Configuration::load(&path).unwrap();
    config.add_section("stale").unwrap();

    let mut document = std::collections::BTreeMap::new();
    document.insert("ui".to_string(), ui_section());
    config.replace(document).unwrap();

    assert!(!config.has_section("stale"));
    assert_eq!(config.section("ui").unwrap(), &ui_section());
}
