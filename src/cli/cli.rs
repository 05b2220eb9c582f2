use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "shapes")]
#[clap(bin_name = "shapes")]
#[clap(about = "Factorials, repeated strings and the area of simple shapes", long_about = None)]
pub struct Cli {
    /// Log at debug level when RUST_LOG is not set
    #[clap(short, long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Parser, Debug)]
pub enum Commands {
    /// Print the factorial of N
    #[clap(arg_required_else_help = true, allow_negative_numbers = true)]
    Factorial {
        #[clap(required = true)]
        n: i64,
    },
    /// Print S repeated COUNT times
    #[clap(arg_required_else_help = true, allow_negative_numbers = true)]
    Repeat {
        #[clap(required = true)]
        s: String,
        #[clap(required = true)]
        count: i64,
    },
    /// Print area and perimeter of shapes such as `rectangle:10,5`, `circle:10`, `triangle:10,5`
    #[clap(arg_required_else_help = true)]
    Shape {
        #[clap(required = true, min_values = 1)]
        specs: Vec<String>,
    },
    /// Print the reference values
    #[clap()]
    Demo,
}
