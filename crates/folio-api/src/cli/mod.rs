//! CLI command definitions for the `folio` binary.

pub mod contact;
pub mod sections;

use clap::{Parser, Subcommand};

/// Portfolio site server and tools.
#[derive(Parser)]
#[command(name = "folio", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Also export spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (contact endpoint, sections, static site).
    Serve {
        /// Address to bind (overrides config.toml).
        #[arg(long, env = "FOLIO_HOST")]
        host: Option<String>,

        /// Port to listen on (overrides config.toml).
        #[arg(short, long, env = "FOLIO_PORT")]
        port: Option<u16>,
    },

    /// Submit a contact message the way the site's form does.
    ///
    /// Posts to the contact endpoint first and writes straight to the
    /// backend if that fails.
    Contact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,

        /// Contact endpoint URL (overrides config.toml).
        #[arg(long, env = "FOLIO_CONTACT_ENDPOINT")]
        endpoint: Option<String>,
    },

    /// Load and render the content sections.
    Sections {
        /// Only this container (project-list, skills-list, blog-list, testimonial-list).
        container: Option<String>,
    },
}
