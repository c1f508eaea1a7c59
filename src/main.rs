// SPDX-License-Identifier: MPL-2.0
use service_deck::app::{self, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        api_base: args.opt_value_from_str("--api-base").unwrap(),
    };

    app::run(flags)
}
