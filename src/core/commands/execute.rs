//! Command handlers.

use log::warn;

use super::{Command, CommandResult, PathArg};
use crate::config::HELP_TEXT;
use crate::core::error::CommandError;
use crate::core::session::Session;
use crate::models::OutputLine;

/// Execute a parsed command against the session.
///
/// Handlers only mutate the session on success: a failed `cd` leaves the
/// current directory alone and a failed `mkdir` creates nothing.
pub fn execute_command(cmd: Command, session: &mut Session) -> Result<CommandResult, CommandError> {
    match cmd {
        Command::Ls(path) => ls(session, path.as_ref()),
        Command::Cd(path) => cd(session, path.as_ref()),
        Command::Mkdir(name) => mkdir(session, name.as_deref()),
        Command::Pwd => Ok(CommandResult::output(vec![OutputLine::system(
            session.current_path(),
        )])),
        Command::Clear => Ok(CommandResult::clear()),
        Command::Help => Ok(CommandResult::output(
            HELP_TEXT.lines().map(OutputLine::system).collect(),
        )),
        Command::Unknown(name) => Err(CommandError::NotFound(name)),
    }
}

fn ls(session: &Session, path: Option<&PathArg>) -> Result<CommandResult, CommandError> {
    let target = match path {
        Some(path) => session
            .resolve(path.as_str())
            .ok_or_else(|| CommandError::LsNotFound(path.to_string()))?,
        None => session.cwd(),
    };

    let names = session.fs().list_dirs(target);
    if names.is_empty() {
        return Ok(CommandResult::empty());
    }
    Ok(CommandResult::output(vec![OutputLine::system(
        names.join("  "),
    )]))
}

fn cd(session: &mut Session, path: Option<&PathArg>) -> Result<CommandResult, CommandError> {
    let Some(path) = path else {
        let home = session.home_path().to_string();
        match session.resolve(&home) {
            Some(target) => session.set_cwd(target),
            None => warn!("cd: home directory {home} does not exist"),
        }
        return Ok(CommandResult::empty());
    };

    let target = session
        .resolve(path.as_str())
        .ok_or_else(|| CommandError::CdNotFound(path.to_string()))?;
    session.set_cwd(target);
    Ok(CommandResult::empty())
}

fn mkdir(session: &mut Session, name: Option<&str>) -> Result<CommandResult, CommandError> {
    let name = name.ok_or(CommandError::MkdirMissingOperand)?;
    let cwd = session.cwd();
    session.fs_mut().make_dir(cwd, name)?;
    Ok(CommandResult::empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OutputLineData;

    fn run(session: &mut Session, name: &str, args: &[&str]) -> Result<CommandResult, CommandError> {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        execute_command(Command::parse(name, &args), session)
    }

    fn single_text(result: &CommandResult) -> &str {
        assert_eq!(result.output.len(), 1);
        match &result.output[0].data {
            OutputLineData::System(s) => s,
            other => panic!("Expected System line, got {other:?}"),
        }
    }

    #[test]
    fn test_ls_current() {
        let mut session = Session::default();
        let result = run(&mut session, "ls", &[]).unwrap();
        assert_eq!(single_text(&result), "documents  downloads  projects");
    }

    #[test]
    fn test_ls_path() {
        let mut session = Session::default();
        let result = run(&mut session, "ls", &["/"]).unwrap();
        assert_eq!(single_text(&result), "home");
        let result = run(&mut session, "ls", &[".."]).unwrap();
        assert_eq!(single_text(&result), "user");
    }

    #[test]
    fn test_ls_empty_directory_prints_nothing() {
        let mut session = Session::default();
        let result = run(&mut session, "ls", &["documents"]).unwrap();
        assert!(result.output.is_empty());
    }

    #[test]
    fn test_ls_missing() {
        let mut session = Session::default();
        let err = run(&mut session, "ls", &["nope"]).unwrap_err();
        assert_eq!(err, CommandError::LsNotFound("nope".to_string()));
    }

    #[test]
    fn test_cd_and_back() {
        let mut session = Session::default();
        let start = session.cwd();
        run(&mut session, "cd", &["projects"]).unwrap();
        assert_eq!(session.current_path(), "/home/user/projects");
        run(&mut session, "cd", &[".."]).unwrap();
        assert_eq!(session.cwd(), start);
    }

    #[test]
    fn test_cd_missing_leaves_cwd() {
        let mut session = Session::default();
        let start = session.cwd();
        let err = run(&mut session, "cd", &["/nonexistent"]).unwrap_err();
        assert_eq!(err.to_string(), "cd: no such file or directory: /nonexistent");
        assert_eq!(session.cwd(), start);
    }

    #[test]
    fn test_cd_home() {
        let mut session = Session::default();
        run(&mut session, "cd", &["/"]).unwrap();
        let result = run(&mut session, "cd", &[]).unwrap();
        assert!(result.output.is_empty());
        assert_eq!(session.current_path(), "/home/user");
    }

    #[test]
    fn test_cd_home_missing_is_silent() {
        let mut session = Session::default();
        run(&mut session, "cd", &["/"]).unwrap();
        session.set_home_path("/home/nobody");
        let result = run(&mut session, "cd", &[]).unwrap();
        assert!(result.output.is_empty());
        assert_eq!(session.current_path(), "/");
    }

    #[test]
    fn test_mkdir() {
        let mut session = Session::default();
        run(&mut session, "mkdir", &["notes"]).unwrap();
        let result = run(&mut session, "ls", &[]).unwrap();
        assert_eq!(single_text(&result), "documents  downloads  notes  projects");
    }

    #[test]
    fn test_mkdir_errors() {
        let mut session = Session::default();
        let nodes = session.fs().node_count();
        assert_eq!(
            run(&mut session, "mkdir", &[]).unwrap_err(),
            CommandError::MkdirMissingOperand
        );
        assert_eq!(
            run(&mut session, "mkdir", &["a/b"]).unwrap_err(),
            CommandError::MkdirInvalidName
        );
        assert_eq!(
            run(&mut session, "mkdir", &["documents"]).unwrap_err(),
            CommandError::MkdirExists("documents".to_string())
        );
        assert_eq!(session.fs().node_count(), nodes);
    }

    #[test]
    fn test_pwd_is_never_collapsed() {
        let mut session = Session::default();
        let result = run(&mut session, "pwd", &[]).unwrap();
        assert_eq!(single_text(&result), "/home/user");
    }

    #[test]
    fn test_clear() {
        let mut session = Session::default();
        let result = run(&mut session, "clear", &[]).unwrap();
        assert!(result.clear_screen);
        assert!(result.output.is_empty());
    }

    #[test]
    fn test_help() {
        let mut session = Session::default();
        let result = run(&mut session, "help", &[]).unwrap();
        assert_eq!(result.output.len(), 7);
        for name in Command::names() {
            assert!(
                result
                    .output
                    .iter()
                    .any(|line| line.text().trim_start().starts_with(name)),
                "help does not mention {name}"
            );
        }
    }

    #[test]
    fn test_unknown() {
        let mut session = Session::default();
        let err = run(&mut session, "rm", &["-rf"]).unwrap_err();
        assert_eq!(err.to_string(), "Command not found: rm");
    }
}
