// src/core/spelunk.rs
use crate::config::ToolPaths;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

pub mod runner;

pub use runner::{CommandRunner, SystemRunner};

/// Documentation generator configuration expected in the working directory.
pub const DOXYFILE: &str = "Doxyfile";

/// One external indexing tool in the preparation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Doxygen,
    Cscope,
    Gtags,
    Htags,
}

impl Step {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Doxygen => "doxygen",
            Self::Cscope => "cscope",
            Self::Gtags => "gtags",
            Self::Htags => "htags",
        }
    }

    fn program(self, tools: &ToolPaths) -> &Path {
        match self {
            Self::Doxygen => &tools.doxygen,
            Self::Cscope => &tools.cscope,
            Self::Gtags => &tools.gtags,
            Self::Htags => &tools.htags,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which optional tools to run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SpelunkOptions {
    /// Kernel source: keep cscope away from the system include directory.
    pub kernel: bool,
    pub doxygen: bool,
    pub cscope: bool,
    /// Generate the HTML tag browser.
    pub web: bool,
    /// Page title for the HTML tag browser.
    pub title: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum SpelunkError {
    #[error("{step} failed (exit status {status})")]
    StepFailed { step: Step, status: i32 },

    #[error("{step} failed: could not run {program}")]
    Launch {
        step: Step,
        program: String,
        #[source]
        source: io::Error,
    },

    #[error(
        "doxygen option selected but no Doxyfile; Doxyfile created, please update it and re-run, or run doxygen directly"
    )]
    DoxyfileCreated,

    #[error("doxygen option selected but no Doxyfile, and doxygen could not create one")]
    NoDoxyfile,

    #[error("failed to write progress output")]
    Output(#[from] io::Error),
}

/// A tool and the arguments it is run with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub step: Step,
    pub args: Vec<String>,
}

impl Invocation {
    fn new(step: Step, args: &[&str]) -> Self {
        Self {
            step,
            args: args.iter().map(|&arg| arg.to_owned()).collect(),
        }
    }
}

/// Lists the tools `options` asks for, in the order they must run:
/// doxygen, cscope, gtags (always), htags.
#[must_use]
pub fn plan(options: &SpelunkOptions) -> Vec<Invocation> {
    let mut steps = Vec::new();

    if options.doxygen {
        steps.push(Invocation::new(Step::Doxygen, &[DOXYFILE]));
    }

    if options.cscope {
        let mut cscope = Invocation::new(Step::Cscope, &["-R", "-q", "-b"]);
        if options.kernel {
            cscope.args.push(String::from("-k"));
        }
        steps.push(cscope);
    }

    steps.push(Invocation::new(Step::Gtags, &[]));

    if options.web {
        let mut htags = Invocation::new(Step::Htags, &["--line-number", "--symbol"]);
        if let Some(title) = &options.title {
            htags.args.push(String::from("--title"));
            htags.args.push(title.clone());
        }
        steps.push(htags);
    }

    steps
}

/// Runs the planned tools in `root`, stopping at the first failure.
///
/// A missing `Doxyfile` is not run through: doxygen is asked to write a
/// template and the sequence ends with [`SpelunkError::DoxyfileCreated`] so
/// the user can edit it first.
///
/// # Errors
///
/// Returns the first step that exits non-zero or cannot be launched, or the
/// Doxyfile bootstrap outcome.
pub fn run_tools<R, W>(
    root: &Path,
    options: &SpelunkOptions,
    tools: &ToolPaths,
    runner: &mut R,
    out: &mut W,
) -> Result<(), SpelunkError>
where
    R: CommandRunner,
    W: Write,
{
    for invocation in plan(options) {
        let step = invocation.step;
        let program = step.program(tools);

        if step == Step::Doxygen && !root.join(DOXYFILE).exists() {
            return Err(bootstrap_doxyfile(root, program, runner));
        }

        info!(%step, "running");
        let status = runner
            .run(program, &invocation.args)
            .map_err(|source| SpelunkError::Launch {
                step,
                program: program.display().to_string(),
                source,
            })?;

        if status != 0 {
            return Err(SpelunkError::StepFailed { step, status });
        }
        writeln!(out, "{step} complete")?;
    }

    writeln!(out, "ready to spelunk")?;
    Ok(())
}

fn bootstrap_doxyfile<R: CommandRunner>(root: &Path, program: &Path, runner: &mut R) -> SpelunkError {
    // The template generator's status is not trusted; the file is.
    match runner.run(program, &[String::from("-g")]) {
        Ok(status) => debug!(status, "doxygen -g finished"),
        Err(err) => debug!(error = %err, "doxygen -g could not be launched"),
    }

    if root.join(DOXYFILE).exists() {
        SpelunkError::DoxyfileCreated
    } else {
        SpelunkError::NoDoxyfile
    }
}
