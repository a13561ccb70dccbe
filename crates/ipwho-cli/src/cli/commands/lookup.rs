//! `ipwho lookup` and `ipwho <ip>` - geolocate an IP address.

use anyhow::Result;
use tracing::debug;

use super::Context;
use crate::cli::Verb;
use crate::output;

pub async fn execute(ctx: Context, verb: Verb) -> Result<()> {
    let client = ctx.client()?;

    let record = match &verb {
        Verb::SelfLookup => client.geolocate().lookup().await?,
        Verb::ExplicitLookup(ip) => client.geolocate().lookup_ip(ip).await?,
    };

    debug!(mode = %ctx.output_mode, "rendering result");
    let stdout = std::io::stdout();
    output::render(&record, &verb, ctx.output_mode, &mut stdout.lock())
}
