use iced_vitae::app::{self, Flags};
use pico_args;
use std::path::PathBuf;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        config_path: args
            .opt_value_from_str::<_, PathBuf>("--config")
            .unwrap_or(None),
        reduced_motion: args.contains("--reduced-motion"),
    };

    app::run(flags)
}
