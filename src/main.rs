use riffwave::cli::{Args, BatchPipeline, Pipeline, is_batch_pattern, is_directory};
use riffwave::show::ShowOptions;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
	let default = if verbose { "debug" } else { "warn" };
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
		.with_writer(std::io::stderr)
		.init();
}

fn main() {
	let args = Args::parse();
	init_tracing(args.verbose);

	let opts = ShowOptions { hex_limit: args.hex_limit };
	let range = args.range();

	let batch_output = args.output.as_ref().map(|o| is_directory(o)).unwrap_or(false);
	let result = if is_batch_pattern(&args.input) || batch_output {
		let batch = BatchPipeline::new(args.input.clone(), args.output.clone(), range, opts);
		batch.run()
	} else {
		let pipeline = Pipeline::new(args.input.clone(), args.output.clone(), range, opts);
		pipeline.run().map(|report| vec![report])
	};

	match result {
		Ok(reports) => {
			for report in reports {
				println!("{}", report);
			}
			if let Some(output) = &args.output {
				println!("ok: {} -> {}", args.input, output);
			}
		}
		Err(e) => {
			eprintln!("Error: {}", e);
			std::process::exit(1);
		}
	}
}
