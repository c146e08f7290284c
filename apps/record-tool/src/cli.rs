use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Replace invalid or repeated field names with `_<position>`
    /// (also enabled by RECORD_RENAME=1)
    #[arg(long, global = true)]
    pub rename: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a record type and print its signature and field names
    Inspect {
        /// Type name
        type_name: String,

        /// Field names separated by whitespace and/or commas
        fields: String,
    },

    /// Build a record from JSON values and print it
    Make {
        /// Type name
        type_name: String,

        /// Field names separated by whitespace and/or commas
        fields: String,

        /// JSON array of values in field order, or an object with --named
        values: String,

        /// Read values as a JSON object keyed by field name
        #[arg(long)]
        named: bool,
    },
}
