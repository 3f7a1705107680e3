//! Declarative flag binding for small command-line tools
//!
//! Parameters are declared once, either through the [bind!] macro on a struct
//! or by registering [Param]s by hand. A [Command] then tokenizes the process
//! arguments, validates every parameter, reports all violations in one pass
//! and writes the typed values back into the struct's fields. Once parsing
//! succeeds a small spinner keeps the terminal alive until
//! [Command::stop_loading] is called.
//!
//! ```no_run
//! use flagbind::{bind, Command};
//!
//! bind! {
//!     #[derive(Debug, Default)]
//!     struct Params {
//!         user: String { name: "u", usage: "User name", require: true },
//!         mode: String { name: "m", usage: "Mode", type: option, options: "global:Global,rule:Rule" },
//!         verbose: bool { name: "v", usage: "Verbose output", type: bool },
//!     }
//! }
//!
//! let mut params = Params::default();
//! let mut cmd = Command::new("Proxy client", "Connecting ");
//! if !cmd.launch(&mut params) {
//!     std::process::exit(1);
//! }
//! // .. long running work ..
//! cmd.stop_loading();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod binding;
mod error;
mod param;
mod registry;
mod spinner;
mod tokenize;
mod usage;
mod validate;

pub use binding::{Bind, FromValue};
pub use error::{Error, Result, Violation};
pub use param::{parse_options, Param, ParamType, Value};
pub use registry::Registry;
pub use spinner::{Spinner, DEFAULT_INTERVAL};
pub use tokenize::{tokenize, Tokens};

pub use indicatif::ProgressDrawTarget;
use std::io::{self, Write};
use std::time::Duration;
use std::{env, process};

/// Gets file name current exe as a string
pub(crate) fn get_cur_exe() -> Result<String> {
    Ok(env::current_exe()
        .map_err(|_| Error::InvalidCurExe)?
        .file_name()
        .ok_or(Error::InvalidCurExe)?
        .to_os_string()
        .into_string()
        .map_err(|_| Error::InvalidCurExe)?
        .trim()
        .to_string())
}

/// Result of a parse which didn't hit a hard [Error]
#[must_use]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every parameter validated, the spinner has started if it's enabled
    Ready,
    /// A help flag was given, usage has been printed and nothing was validated
    Help,
    /// One or more parameters failed validation, each has been printed already
    Invalid(Vec<Violation>),
}

impl Outcome {
    /// If parsing succeeded
    pub fn is_ready(&self) -> bool {
        matches!(self, Outcome::Ready)
    }
}

/// Parameter declarations and parse state for one invocation
#[derive(Debug)]
pub struct Command {
    /// Shown above the parameter list in usage
    pub usage_title: String,
    /// Shown before the spinner
    pub loading_title: String,
    registry: Registry,
    colored: bool,
    spinner_enabled: bool,
    interval: Duration,
    spinner: Option<Spinner>,
}

impl Command {
    pub fn new(usage_title: impl Into<String>, loading_title: impl Into<String>) -> Self {
        Self {
            usage_title: usage_title.into(),
            loading_title: loading_title.into(),
            registry: Registry::new(),
            colored: true,
            spinner_enabled: true,
            interval: DEFAULT_INTERVAL,
            spinner: None,
        }
    }

    /// Enables or disables ANSI styling of usage and error output
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Enables or disables the spinner started after a successful parse
    pub fn spinner(mut self, enabled: bool) -> Self {
        self.spinner_enabled = enabled;
        self
    }

    pub fn spinner_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Declares a parameter, see [Registry::register]
    pub fn register(&mut self, param: Param) {
        self.registry.register(param)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn get(&self, name: &str) -> Result<&str> {
        self.registry.get(name)
    }

    pub fn get_int(&self, name: &str) -> Result<i64> {
        self.registry.get_int(name)
    }

    pub fn get_bool(&self, name: &str) -> Result<bool> {
        self.registry.get_bool(name)
    }

    /// Parses process arguments into `dest`, exiting with status `0` if help was requested
    ///
    /// Violations are printed to stdout as they're found, hard errors are
    /// printed to stderr along with usage. Returns if parsing succeeded.
    pub fn launch<T: Bind>(&mut self, dest: &mut T) -> bool {
        let mut stream = env::args();
        stream.next();

        let stdout = io::stdout();
        let stderr = io::stderr();
        match self.launch_custom(dest, stream, &mut stdout.lock(), &mut stderr.lock()) {
            Some(ok) => ok,
            None => process::exit(0),
        }
    }

    /// [Command::launch] over custom streams, `None` means help was requested and printed to `buf`
    ///
    /// Hard errors are written to `err_buf` after the usage listing.
    pub fn launch_custom<T: Bind>(
        &mut self,
        dest: &mut T,
        args: impl IntoIterator<Item = String>,
        buf: &mut impl Write,
        err_buf: &mut impl Write,
    ) -> Option<bool> {
        match self.parse_from(dest, args, buf) {
            Ok(Outcome::Ready) => Some(true),
            Ok(Outcome::Help) => None,
            Ok(Outcome::Invalid(_)) => Some(false),
            Err(err) => {
                self.report_error(&err, err_buf);
                Some(false)
            }
        }
    }

    /// Parses process arguments into `dest`, writing usage and violations to stdout
    pub fn parse<T: Bind>(&mut self, dest: &mut T) -> Result<Outcome> {
        let mut stream = env::args();
        stream.next();
        self.parse_from(dest, stream, &mut io::stdout().lock())
    }

    /// Registers `dest`'s parameters, parses `args` and writes values back into `dest`
    ///
    /// `args` shouldn't include the program name. Fields are written even
    /// when other parameters failed, integers which didn't parse are skipped.
    pub fn parse_from<T: Bind>(
        &mut self,
        dest: &mut T,
        args: impl IntoIterator<Item = String>,
        buf: &mut impl Write,
    ) -> Result<Outcome> {
        for param in T::params() {
            self.register(param);
        }

        let outcome = self.run(args, buf)?;
        if outcome != Outcome::Help {
            for param in self.registry.iter() {
                if let Some(value) = param.typed_value() {
                    dest.assign(&param.name, &value);
                }
            }
        }

        self.start_loading(&outcome);
        Ok(outcome)
    }

    /// Parses `args` against parameters registered by hand, query them with [Command::get] and friends
    pub fn parse_args(
        &mut self,
        args: impl IntoIterator<Item = String>,
        buf: &mut impl Write,
    ) -> Result<Outcome> {
        let outcome = self.run(args, buf)?;
        self.start_loading(&outcome);
        Ok(outcome)
    }

    /// Writes full usage listing to buffer
    pub fn help(&self, buf: &mut impl Write) -> Result<()> {
        usage::write_usage(buf, &self.usage_title, &self.registry, self.colored)
    }

    /// If the spinner is running
    pub fn is_loading(&self) -> bool {
        self.spinner.is_some()
    }

    /// Stops the spinner and clears its line, does nothing if it isn't running
    pub fn stop_loading(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.stop()
        }
    }

    /// Tokenizes, validates every parameter and reports violations as they're found
    fn run(&mut self, args: impl IntoIterator<Item = String>, buf: &mut impl Write) -> Result<Outcome> {
        for param in self.registry.iter_mut() {
            param.reset();
        }

        let tokens = tokenize(args, &self.registry)?;
        self.registry.set_help(tokens.help);
        if tokens.help {
            self.help(buf)?;
            return Ok(Outcome::Help);
        }

        let mut violations = vec![];
        for param in self.registry.iter_mut() {
            if param.kind == ParamType::Bool {
                param.bool_value = tokens.flags.get(&param.name).copied().unwrap_or(false);
            } else if let Some(value) = tokens.values.get(&param.name) {
                param.value = value.clone();
            }

            if let Some(violation) = validate::validate(param) {
                tracing::debug!(%violation, "parameter failed validation");
                usage::write_violation(buf, param, &violation, self.colored)?;
                violations.push(violation);
            }
        }

        if violations.is_empty() {
            tracing::debug!(params = self.registry.len(), "all parameters validated");
            Ok(Outcome::Ready)
        } else {
            Ok(Outcome::Invalid(violations))
        }
    }

    /// Writes usage followed by `err`, nowhere left to report to if this fails
    fn report_error(&self, err: &Error, buf: &mut impl Write) {
        const ERROR: &str = "\nError:\n  ";

        // help
        if self.help(buf).is_err() {
            let _ = writeln!(buf, "{}Couldn't generate help for error below!", ERROR);
        }

        // print error
        let _ = writeln!(buf, "{}{}!", ERROR, err);
    }

    fn start_loading(&mut self, outcome: &Outcome) {
        if self.spinner_enabled && outcome.is_ready() {
            self.spinner = Some(Spinner::start_with(
                &self.loading_title,
                self.interval,
                ProgressDrawTarget::stdout(),
            ));
        }
    }
}
