use std::io::{self, BufRead, Write};

use clap::Parser;

use bsp_speeches::prelude::*;

/// Fetch, clean and export BSP speeches for a date range
#[derive(Parser, Debug)]
#[command(name = "bsp-speeches")]
#[command(about = "Fetch, clean and export public speeches from the BSP content API")]
#[command(version)]
struct Args {
    /// Start date (e.g., '6/29', '01/01/2023', 'January 1, 2023')
    #[arg(long)]
    start: Option<String>,

    /// End date (e.g., '6/30', '12/31/2023', 'December 31, 2023')
    #[arg(long)]
    end: Option<String>,

    /// Output directory for raw, processed and CSV files
    #[arg(long, default_value = "bsp_speeches")]
    out: String,

    /// Fetch all speeches without prompting for a date range
    #[arg(long)]
    all: bool,

    /// Skip writing output files, just print the summary
    #[arg(long)]
    no_save: bool,
}

/// Prompt for a date bound on stdin; blank input means "no bound"
fn prompt_date(label: &str) -> anyhow::Result<Option<String>> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let (start_date, end_date) = if args.all {
        (args.start, args.end)
    } else {
        let start = match args.start {
            Some(s) => Some(s),
            None => {
                println!("BSP Speech Parser");
                println!("=================");
                println!("Enter date range to fetch speeches (leave blank for all speeches)");
                println!("For simple date formats like '6/29', the current year will be used");
                println!("All dates are interpreted as Philippine Time (UTC+8)");
                prompt_date("Start date (e.g., '6/29', '01/01/2023', 'January 1, 2023'): ")?
            }
        };
        let end = match args.end {
            Some(s) => Some(s),
            None => prompt_date("End date (e.g., '6/30', '12/31/2023', 'December 31, 2023'): ")?,
        };
        (start, end)
    };

    let mut builder = ConfigBuilder::new();
    if !args.no_save {
        builder = builder.output_dir(&args.out);
    }
    if let Some(start) = start_date {
        builder = builder.start_date(start);
    }
    if let Some(end) = end_date {
        builder = builder.end_date(end);
    }
    let config = builder.build()?;

    let processor = SpeechProcessor::new(config);
    let speeches = processor.run()?;

    println!("Successfully processed {} speeches.", speeches.len());

    Ok(())
}
