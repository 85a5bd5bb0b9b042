#[cfg(test)]
mod tests {
    use super::super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_command() {
        let packager = AppPackager::from_config(Path::new("/work"), &AppConfig::default());
        let cmd = packager.command().unwrap();
        assert_eq!(cmd.to_string(), "npm run tauri build");
        assert_eq!(cmd.working_dir(), Path::new("/work/tauri-app"));
    }

    #[test]
    fn test_empty_command_is_error() {
        let packager = AppPackager::new("/work", Vec::new());
        assert!(packager.package().is_err());
    }

    #[test]
    fn test_missing_project_dir_is_error_when_lenient() {
        let dir = tempdir().unwrap();
        let packager = AppPackager::new(dir.path().join("tauri-app"), vec!["npm".to_string()]);

        let err = packager.package().unwrap_err();
        assert!(err
            .to_string()
            .contains("Desktop app project directory not found"));
    }

    #[cfg(unix)]
    #[test]
    fn test_missing_program_is_lenient() {
        let dir = tempdir().unwrap();
        let packager = AppPackager::new(dir.path(), vec!["no-such-packager-lumos".to_string()]);

        let outcome = packager.package().unwrap();
        assert!(matches!(outcome, StepOutcome::NotStarted { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_packaging_is_lenient_by_default() {
        let dir = tempdir().unwrap();
        let packager = AppPackager::new(
            dir.path(),
            vec!["sh".to_string(), "-c".to_string(), "exit 1".to_string()],
        );

        let outcome = packager.package().unwrap();
        assert_eq!(outcome, StepOutcome::Failed { code: Some(1) });
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_packaging_strict() {
        let dir = tempdir().unwrap();
        let packager = AppPackager::new(
            dir.path(),
            vec!["sh".to_string(), "-c".to_string(), "exit 1".to_string()],
        )
        .with_strict(true);

        let err = packager.package().unwrap_err();
        assert!(err.to_string().contains("Packaging failed"));
    }
}
