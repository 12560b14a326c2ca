use anyhow::Result;
use atty::Stream;
use petstore_cli::codec::{self, Format};
use petstore_cli::commands::{
    convert::convert,
    decode::describe,
    input::{check_input, normalize_input_path, open_output, read_input},
};
use petstore_cli::config;
use petstore_cli::models::TypeHolderExample;
use std::{io::Write, path::PathBuf};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "petstore-cli",
    about = "Build, decode and convert TypeHolderExample payloads"
)]
struct Opt {
    /// switch on verbosity
    #[structopt(short)]
    verbose: bool,
    /// Read the configuration from <config> instead of the user's config directory
    #[structopt(long = "config", parse(from_os_str))]
    config: Option<PathBuf>,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Encode a record built from the given fields
    #[structopt(name = "encode")]
    ENCODE {
        /// Output format, json or xml
        #[structopt(short, long)]
        format: Option<Format>,
        #[structopt(long)]
        string_item: String,
        #[structopt(long, allow_hyphen_values = true)]
        number_item: f32,
        #[structopt(long, allow_hyphen_values = true)]
        integer_item: i32,
        #[structopt(long)]
        bool_item: bool,
        /// Comma separated list of integers
        #[structopt(long, use_delimiter = true, allow_hyphen_values = true)]
        array_item: Vec<i32>,
    },
    /// Decode a payload and print its fields
    #[structopt(name = "decode")]
    DECODE {
        /// Input format, json or xml
        #[structopt(short, long)]
        format: Option<Format>,
        /// Read input from <file> instead of stdin
        #[structopt(short = "i", long = "input", name = "file", parse(from_os_str))]
        input_file: Option<PathBuf>,
    },
    /// Re-encode a payload in another format
    #[structopt(name = "convert")]
    CONVERT {
        /// Input format, json or xml
        #[structopt(long)]
        from: Option<Format>,
        /// Output format, json or xml
        #[structopt(long)]
        to: Format,
        /// Read input from <file> instead of stdin
        #[structopt(short = "i", long = "input", name = "file", parse(from_os_str))]
        input_file: Option<PathBuf>,
        /// Write output to <output> instead of stdout
        #[structopt(short = "o", long = "output", parse(from_os_str))]
        output_file: Option<PathBuf>,
    },
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    init_logger(opt.verbose);

    // Check some options validity before doing any work
    if let Command::DECODE { ref input_file, .. } | Command::CONVERT { ref input_file, .. } =
        opt.cmd
    {
        let input_file = normalize_input_path(input_file.clone());
        if let Err(e) = check_input(input_file.as_deref(), atty::is(Stream::Stdin)) {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }

    let conf = config::load(opt.config.as_deref())?;
    log::debug!("using configuration {:?}", conf);

    match opt.cmd {
        Command::ENCODE {
            format,
            string_item,
            number_item,
            integer_item,
            bool_item,
            array_item,
        } => {
            let record = TypeHolderExample::new(
                string_item,
                number_item,
                integer_item,
                bool_item,
                array_item,
            );
            let payload = codec::encode(&record, format.unwrap_or(conf.default_format))?;
            println!("{}", payload);
        }
        Command::DECODE { format, input_file } => {
            let input_file = normalize_input_path(input_file);
            let payload = read_input(input_file.as_deref())?;
            let record: TypeHolderExample =
                codec::decode(&payload, format.unwrap_or(conf.default_format))?;
            print!("{}", describe(&record));
        }
        Command::CONVERT {
            from,
            to,
            input_file,
            output_file,
        } => {
            let input_file = normalize_input_path(input_file);
            let payload = read_input(input_file.as_deref())?;
            let converted = convert(&payload, from.unwrap_or(conf.default_format), to)?;

            let mut handle = open_output(output_file.as_deref())?;
            writeln!(handle, "{}", converted)?;

            if let Some(path) = output_file {
                log::debug!("wrote {} payload onto {:?}", to, path);
            }
        }
    };

    Ok(())
}
