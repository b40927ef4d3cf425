//! External process runner.
//!
//! Every deployment step that is not a plain file operation is delegated to a
//! third-party tool. Commands run one at a time and any failure is fatal: the
//! pipelines are not safe to retry over a half-populated staging directory.

use crate::bundler::error::{Error, Result};
use std::{
    collections::BTreeMap,
    ffi::{OsStr, OsString},
    fmt,
    path::{MAIN_SEPARATOR, Path, PathBuf},
};

/// A program, its arguments and the environment it needs.
///
/// Environment variables are attached to the command instead of being written
/// into the current process.
#[derive(Clone, Debug)]
pub struct CommandLine {
    program: PathBuf,
    args: Vec<OsString>,
    envs: BTreeMap<OsString, OsString>,
}

impl CommandLine {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            envs: BTreeMap::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Adds variables to the child's environment, on top of the inherited one.
    pub fn envs(mut self, envs: BTreeMap<OsString, OsString>) -> Self {
        self.envs.extend(envs);
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn get_args(&self) -> &[OsString] {
        &self.args
    }

    /// Renders the command as one line for a command interpreter.
    ///
    /// The program path is escaped with [`escape_windows_executable_path`];
    /// arguments containing spaces are quoted unless they already carry quotes.
    pub fn to_shell_line(&self) -> String {
        let mut line = escape_windows_executable_path(&self.program.to_string_lossy());

        for arg in &self.args {
            line.push(' ');
            line.push_str(&quote_argument(&arg.to_string_lossy()));
        }

        line
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;

        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }

        Ok(())
    }
}

/// `PATH` for a child process, so bare tool names in shell lines resolve
/// against the configured search path. Empty search paths leave the
/// inherited `PATH` alone.
pub fn search_path_env(search_path: &OsStr) -> BTreeMap<OsString, OsString> {
    let mut envs = BTreeMap::new();

    if !search_path.is_empty() {
        envs.insert(OsString::from("PATH"), search_path.to_os_string());
    }

    envs
}

/// Whether `program` names a file by path that does not exist.
///
/// Bare names are left to the OS search. Windows resolves executables through
/// `PATH`/`PATHEXT` rules even for path-like names, so the check is skipped
/// there.
pub fn is_missing_executable(program: &Path, windows: bool) -> bool {
    if windows {
        return false;
    }

    program.to_string_lossy().contains(MAIN_SEPARATOR) && !program.is_file()
}

/// Quotes every backslash-separated segment of a Windows path that contains a
/// space, e.g. `C:\Program Files (x86)\Inno Setup 6\ISCC.exe` becomes
/// `C:\"Program Files (x86)"\"Inno Setup 6"\ISCC.exe`.
pub fn escape_windows_executable_path(executable_path: &str) -> String {
    if !executable_path.contains(' ') {
        return executable_path.to_string();
    }

    executable_path
        .split('\\')
        .map(|segment| {
            if segment.contains(' ') {
                format!("\"{}\"", segment)
            } else {
                segment.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\\")
}

fn quote_argument(arg: &str) -> String {
    if arg.contains(' ') && !arg.contains('"') {
        format!("\"{}\"", arg)
    } else {
        arg.to_string()
    }
}

/// Run a command to completion.
///
/// # Errors
///
/// - [`Error::ToolNotFound`] if the program is a path that does not exist
///   (checked before spawning, except on Windows)
/// - [`Error::CommandFailed`] if the process cannot be started
/// - [`Error::CommandExited`] if it exits with a non-zero status
pub async fn run(command: &CommandLine) -> Result<()> {
    if is_missing_executable(&command.program, cfg!(windows)) {
        let name = command
            .program
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| command.program.display().to_string());
        return Err(Error::ToolNotFound { name });
    }

    log::debug!("Running: {}", command);

    let status = tokio::process::Command::new(&command.program)
        .args(&command.args)
        .envs(&command.envs)
        .status()
        .await
        .map_err(|error| Error::CommandFailed {
            command: command.program.display().to_string(),
            error,
        })?;

    check_status(status, command.to_string())
}

/// Run a command through the platform command interpreter (`cmd /C` on
/// Windows, `sh -c` elsewhere), using [`CommandLine::to_shell_line`].
pub async fn run_shell(command: &CommandLine) -> Result<()> {
    let line = command.to_shell_line();

    log::debug!("Running shell: {}", line);

    let mut shell = shell_command(&line);
    let status = shell
        .envs(&command.envs)
        .status()
        .await
        .map_err(|error| Error::CommandFailed {
            command: line.clone(),
            error,
        })?;

    check_status(status, line)
}

#[cfg(windows)]
fn shell_command(line: &str) -> tokio::process::Command {
    let mut shell = tokio::process::Command::new("cmd");
    shell.arg("/C").raw_arg(line);
    shell
}

#[cfg(not(windows))]
fn shell_command(line: &str) -> tokio::process::Command {
    let mut shell = tokio::process::Command::new("sh");
    shell.arg("-c").arg(line);
    shell
}

fn check_status(status: std::process::ExitStatus, command: String) -> Result<()> {
    if !status.success() {
        log::debug!("{} exited with {:?}", command, status.code());
        return Err(Error::CommandExited {
            command,
            code: status.code(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_only_segments_with_spaces() {
        assert_eq!(
            escape_windows_executable_path(r"C:\Program Files (x86)\Inno Setup 6\ISCC.exe"),
            r#"C:\"Program Files (x86)"\"Inno Setup 6"\ISCC.exe"#
        );
        assert_eq!(
            escape_windows_executable_path(r"C:\Qt\5.15.2\msvc2019_64\bin\windeployqt.exe"),
            r"C:\Qt\5.15.2\msvc2019_64\bin\windeployqt.exe"
        );
    }

    #[test]
    fn shell_line_quotes_plain_arguments_with_spaces() {
        let command = CommandLine::new(r"C:\Program Files\7-Zip\7z.exe")
            .arg("a")
            .arg(r"C:\my builds\otter.7z")
            .arg(r#"/DOtterWorkingDir="C:\my builds""#);

        assert_eq!(
            command.to_shell_line(),
            r#"C:\"Program Files"\7-Zip\7z.exe a "C:\my builds\otter.7z" /DOtterWorkingDir="C:\my builds""#
        );
    }

    #[test]
    fn display_joins_program_and_arguments() {
        let command = CommandLine::new("/usr/bin/appimagetool").args(["in", "out"]);
        assert_eq!(command.to_string(), "/usr/bin/appimagetool in out");
    }

    #[test]
    fn bare_names_are_never_reported_missing() {
        assert!(!is_missing_executable(Path::new("powershell"), false));
    }

    #[test]
    fn windows_skips_presence_check() {
        assert!(!is_missing_executable(
            Path::new("/definitely/not/here/linuxdeploy"),
            true
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn missing_path_fails_before_spawning() {
        let temp = tempfile::tempdir().unwrap();
        let program = temp.path().join("linuxdeploy-x86_64.AppImage");

        let error = run(&CommandLine::new(&program)).await.unwrap_err();
        assert!(matches!(error, Error::ToolNotFound { ref name } if name == "linuxdeploy-x86_64.AppImage"));
        assert_eq!(error.to_string(), "failed to locate linuxdeploy-x86_64.AppImage");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_names_command_line() {
        let error = run(&CommandLine::new("/bin/sh").args(["-c", "exit 3"]))
            .await
            .unwrap_err();

        match error {
            Error::CommandExited { command, code } => {
                assert_eq!(command, "/bin/sh -c exit 3");
                assert_eq!(code, Some(3));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn environment_is_passed_to_child() {
        let temp = tempfile::tempdir().unwrap();
        let marker = temp.path().join("qmake");
        let mut envs = BTreeMap::new();
        envs.insert(OsString::from("QMAKE"), marker.clone().into_os_string());

        let command = CommandLine::new("/bin/sh")
            .args(["-c", "touch \"$QMAKE\""])
            .envs(envs);

        run(&command).await.unwrap();
        assert!(marker.is_file());
    }

    #[test]
    fn search_path_becomes_child_path() {
        let envs = search_path_env(OsStr::new("/opt/tools:/usr/bin"));
        assert_eq!(envs.get(OsStr::new("PATH")).unwrap(), "/opt/tools:/usr/bin");

        assert!(search_path_env(OsStr::new("")).is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn shell_resolves_bare_names_on_search_path() {
        let temp = tempfile::tempdir().unwrap();
        let marker = temp.path().join("ran");
        let tool = temp.path().join("powershell");
        std::fs::write(&tool, format!("#!/bin/sh\ntouch \"{}\"\n", marker.display())).unwrap();
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();
        }

        let search_path =
            std::env::join_paths([temp.path(), Path::new("/usr/bin"), Path::new("/bin")]).unwrap();
        let command = CommandLine::new("powershell").envs(search_path_env(&search_path));

        run_shell(&command).await.unwrap();
        assert!(marker.is_file());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn shell_commands_report_exit_status() {
        run_shell(&CommandLine::new("true")).await.unwrap();

        let error = run_shell(&CommandLine::new("false")).await.unwrap_err();
        assert_eq!(error.to_string(), "failed to execute \"false\"");
    }
}
