use super::*;

use std::collections::HashMap;

use tempfile::TempDir;

#[test]
fn default_destination_is_question_folder() {
    let settings = Settings::default();
    assert_eq!(
        settings.question_bank_path,
        PathBuf::from("question").join("question.xlsx")
    );
    assert_eq!(settings.teacher_code, "teacher123");
}

#[test]
fn reads_partial_toml_file() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("maths_tutor.toml");
    fs::write(
        &path,
        "teacher_code = \"s3cret\"\ndefault_language = \"tamil\"\n",
    )
    .expect("write config");

    let settings = read_settings_file(&path).expect("parse");
    assert_eq!(settings.teacher_code, "s3cret");
    assert_eq!(settings.default_language, Language::Tamil);
    assert_eq!(settings.styles_dir, PathBuf::from("styles"));
}

#[test]
fn missing_config_file_yields_defaults() {
    let dir = TempDir::new().expect("tempdir");
    let settings = read_settings_file(&dir.path().join("absent.toml")).expect("defaults");
    assert_eq!(settings, Settings::default());
}

#[test]
fn malformed_config_is_an_error() {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("maths_tutor.toml");
    fs::write(&path, "teacher_code = [").expect("write config");

    let err = load_settings(&path).expect_err("malformed");
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("invalid config file"));
}

#[test]
fn environment_overrides_file_values() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("MATHS_TUTOR__TEACHER_CODE", "from-env"),
        ("MATHS_TUTOR__QUESTION_BANK", "/srv/bank.xlsx"),
        ("MATHS_TUTOR__LANGUAGE", "हिंदी"),
    ]);

    let settings = apply_env_overrides(Settings::default(), |name| {
        env.get(name).map(|v| v.to_string())
    });

    assert_eq!(settings.teacher_code, "from-env");
    assert_eq!(settings.question_bank_path, PathBuf::from("/srv/bank.xlsx"));
    assert_eq!(settings.default_language, Language::Hindi);
    assert_eq!(settings.styles_dir, PathBuf::from("styles"));
}

#[test]
fn unknown_language_override_is_ignored() {
    let settings = apply_env_overrides(Settings::default(), |name| {
        (name == "MATHS_TUTOR__LANGUAGE").then(|| "klingon".to_string())
    });
    assert_eq!(settings.default_language, Language::English);
}
