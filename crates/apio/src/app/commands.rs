use clap::Args;
use clap::Parser;
use clap::Subcommand;
use clap::ValueHint;
use std::path::PathBuf;

const LONG_ABOUT: &str = "\
Open source ecosystem for open FPGA boards.\n\
\n\
This build provides the graph command only.";

const GRAPH_LONG_ABOUT: &str = "\
The graph command generates a graphical representation of the
verilog code in the project.
The command is typically used in the root directory
of the project that contains the apio.ini file.";

const GRAPH_AFTER_LONG_HELP: &str = r#"EXAMPLES:
    apio graph               # Graph the top module
    apio graph -t my_module  # Graph the selected module

The graph command generates the graph in .dot format and then invokes
the dot command from the path to convert it to a .svg format. The dot
command is not included with the apio distribution and needs to be
installed separately. See https://graphviz.org for more details.

[Hint] If you need the graph in other formats, convert the .dot file
to the desired format using the dot command.

apio writes its own warnings and errors to stderr. Stdout carries only
the output of the build."#;

#[derive(Parser)]
#[command(name = "apio")]
#[command(author, version, propagate_version = true)]
#[command(about = "Open source ecosystem for open FPGA boards")]
#[command(long_about = LONG_ABOUT)]
#[command(subcommand_required = true, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Disable colored output (also respects NO_COLOR)
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::BoolishValueParser::new(),
        help_heading = "Output Options"
    )]
    pub no_color: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a visual graph of the code.
    #[command(long_about = GRAPH_LONG_ABOUT)]
    #[command(after_long_help = GRAPH_AFTER_LONG_HELP)]
    Graph(GraphArgs),
}

#[derive(Debug, Clone, Args)]
pub struct GraphArgs {
    /// Set the root directory for the project.
    #[arg(
        short = 'p',
        long,
        value_name = "DIR",
        value_hint = ValueHint::DirPath,
        value_parser = existing_dir,
        default_value = "."
    )]
    pub project_dir: PathBuf,

    /// Set the name of the top module to graph.
    #[arg(short = 't', long, value_name = "NAME")]
    pub top_module: Option<String>,

    /// Force execution despite no 'dot' command.
    #[arg(short = 'f', long)]
    pub force: bool,

    /// Show detailed output.
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

fn existing_dir(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.is_dir() {
        Ok(path)
    } else if path.exists() {
        Err(format!("'{}' is not a directory", value))
    } else {
        Err(format!("directory '{}' does not exist", value))
    }
}
