#[cfg(test)]
mod tests {
    use super::super::*;
    use tempfile::tempdir;

    fn command_line(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_command_line() {
        let cmd = ExternalCommand::from_command_line(
            &command_line(&["cargo", "build", "--release"]),
            "backend",
        )
        .unwrap();

        assert_eq!(cmd.program(), "cargo");
        assert_eq!(cmd.args(), &["build", "--release"]);
        assert_eq!(cmd.working_dir(), Path::new("backend"));
        assert_eq!(cmd.to_string(), "cargo build --release");
    }

    #[test]
    fn test_from_empty_command_line() {
        let result = ExternalCommand::from_command_line(&[], ".");
        assert!(result.is_err());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(StepOutcome::Succeeded.to_string(), "succeeded");
        assert_eq!(
            StepOutcome::Failed { code: Some(2) }.to_string(),
            "exited with status 2"
        );
        assert!(StepOutcome::NotStarted {
            reason: "not found".to_string()
        }
        .to_string()
        .contains("not found"));
    }

    #[test]
    fn test_run_missing_program_is_not_started() {
        let dir = tempdir().unwrap();
        let cmd = ExternalCommand::from_command_line(
            &command_line(&["definitely-not-a-real-program-lumos"]),
            dir.path(),
        )
        .unwrap();

        assert!(matches!(cmd.run(), StepOutcome::NotStarted { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_uses_working_dir() {
        let dir = tempdir().unwrap();
        let cmd = ExternalCommand::from_command_line(
            &command_line(&["sh", "-c", "echo hi > marker.txt"]),
            dir.path(),
        )
        .unwrap();

        let before = std::env::current_dir().unwrap();
        assert_eq!(cmd.run(), StepOutcome::Succeeded);
        assert_eq!(std::env::current_dir().unwrap(), before);
        assert!(dir.path().join("marker.txt").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_run_reports_exit_code() {
        let dir = tempdir().unwrap();
        let cmd = ExternalCommand::from_command_line(&command_line(&["sh", "-c", "exit 3"]), dir.path())
            .unwrap();

        assert_eq!(cmd.run(), StepOutcome::Failed { code: Some(3) });
    }

    #[test]
    fn test_check_outcome_lenient() {
        let cmd = ExternalCommand::from_command_line(&command_line(&["npm"]), ".").unwrap();
        let outcome = StepOutcome::Failed { code: Some(1) };
        assert!(check_outcome("Packaging", &cmd, &outcome, false).is_ok());
    }

    #[test]
    fn test_check_outcome_strict() {
        let cmd = ExternalCommand::from_command_line(&command_line(&["npm", "run"]), ".").unwrap();
        let outcome = StepOutcome::Failed { code: Some(1) };
        let err = check_outcome("Packaging", &cmd, &outcome, true).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Packaging failed"));
        assert!(message.contains("npm run"));
        assert!(message.contains("status 1"));
    }

    #[test]
    fn test_check_outcome_success_strict() {
        let cmd = ExternalCommand::from_command_line(&command_line(&["cargo"]), ".").unwrap();
        assert!(check_outcome("Backend build", &cmd, &StepOutcome::Succeeded, true).is_ok());
    }
}
