use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value = "8000")]
        port: u16,
    },

    /// Send a single prompt and print the generated text
    Generate {
        prompt: String,

        /// Creativity control between 0.0 and 1.0
        #[arg(short, long, default_value = "0.9")]
        temperature: f32,

        /// Upper bound on the length of the generated text
        #[arg(long)]
        max_tokens: Option<u32>,
    },
}
