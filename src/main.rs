// Copyright 2026 the benchmatrix authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use anyhow::Result;
use benchmatrix::cli::Cli;
use benchmatrix::logging::setup_tracing;
use benchmatrix::output::regenerate;
use clap::Parser;

fn main() -> Result<()> {
  let _guard = setup_tracing()?;

  let Cli { output_root } = Cli::parse();
  let main_span = tracing::info_span!("generator");
  let _enter = main_span.enter();

  tracing::info!("Regenerating benchmark sources...");

  let summary = regenerate(&output_root)?;

  tracing::info!(
    "Generation complete: {} files under {}",
    summary.files_written,
    output_root.display()
  );

  Ok(())
}
