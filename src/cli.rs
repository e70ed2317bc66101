use clap::Parser;

use crate::error::SpiralError;
use crate::geometry::PointCount;

#[derive(Parser, Debug)]
#[command(name = "spiral")]
#[command(version, about = "Print golden-spiral points on the unit sphere, one `x y z` line each")]
pub struct Cli {
    /// Number of points to generate (at least 2)
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub count: Option<String>,

    /// Anything after N is accepted and ignored
    #[arg(hide = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub ignored: Vec<String>,
}

impl Cli {
    pub fn point_count(&self) -> Result<PointCount, SpiralError> {
        match &self.count {
            Some(raw) => raw.parse(),
            None => Ok(PointCount::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("spiral").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_argument_means_default_count() {
        assert_eq!(parse(&[]).point_count().unwrap(), PointCount::default());
    }

    #[test]
    fn first_argument_is_the_count() {
        assert_eq!(parse(&["12"]).point_count().unwrap().get(), 12);
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let cli = parse(&["12", "foo", "--bar"]);
        assert_eq!(cli.point_count().unwrap().get(), 12);
        assert_eq!(cli.ignored, vec!["foo", "--bar"]);
    }

    #[test]
    fn negative_count_reaches_validation() {
        assert_eq!(
            parse(&["-3"]).point_count(),
            Err(SpiralError::TooFewPoints(-3))
        );
    }

    #[test]
    fn non_numeric_count_is_rejected() {
        assert!(matches!(
            parse(&["abc"]).point_count(),
            Err(SpiralError::InvalidCount { .. })
        ));
    }

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
