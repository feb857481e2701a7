use shelf::{Config, Console};
use tracing::instrument;

#[instrument(level = "debug", skip_all)]
pub fn run(config: &Config) {
    shelf::showroom::run(&Console, config.rule_width());
}
