// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example showing a full parse and validate pass over the
/// process command line.
///
/// Try:
///
/// ```bash
/// $ cargo run --example process-args -- -doctitle "Widget API" -use -splitindex
/// $ cargo run --example process-args -- -nohelp -helpfile help.html
/// $ cargo run --example process-args -- -windowtitle "<b>Widget API</b>"
/// ```
use std::env;
use std::io;

use htmlopts::{HtmlOptions, Result, StdFileResolver, WriteReporter};

fn main() -> Result<()> {
    // All arguments after the program name belong to the option
    // processor.
    let tokens: Vec<String> = env::args().skip(1).collect();

    let reporter = WriteReporter::new(io::stderr());
    let mut opts = HtmlOptions::with_collaborators(reporter, StdFileResolver);

    println!("INFO: processing {} token(s)", tokens.len());

    opts.process(&tokens)?;
    opts.validate()?;

    let config = opts.into_config();

    println!("INFO: validated configuration: {:#?}", config);

    Ok(())
}
