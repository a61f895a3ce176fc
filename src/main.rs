// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::init();

    let mut args = pico_args::Arguments::from_env();
    let flags = Flags {
        dwell: args.opt_value_from_str("--dwell").unwrap(),
    };

    app::run(flags)
}
