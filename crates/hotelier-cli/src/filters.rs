//! Filter-list parsing for the two positional arguments.
//!
//! An empty filter list means "no restriction"; the user expresses that
//! with the literal sentinel `none`. Validation happens before any supplier
//! is contacted.

use hotelier_core::HotelId;

use crate::error::CliError;

const NO_FILTER_SENTINEL: &str = "none";

pub fn parse_hotel_ids(raw: &str) -> Result<Vec<HotelId>, CliError> {
    if is_sentinel(raw) {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(|token| HotelId::parse(token).map_err(CliError::from))
        .collect()
}

pub fn parse_destination_ids(raw: &str) -> Result<Vec<i64>, CliError> {
    if is_sentinel(raw) {
        return Ok(Vec::new());
    }
    raw.split(',')
        .map(|token| {
            token
                .trim()
                .parse::<i64>()
                .map_err(|_| CliError::InvalidDestinationId {
                    value: token.trim().to_owned(),
                })
        })
        .collect()
}

fn is_sentinel(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case(NO_FILTER_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_means_no_restriction() {
        assert!(parse_hotel_ids("none").expect("sentinel parses").is_empty());
        assert!(parse_hotel_ids("NONE").expect("sentinel parses").is_empty());
        assert!(parse_destination_ids(" none ")
            .expect("sentinel parses")
            .is_empty());
    }

    #[test]
    fn splits_comma_separated_hotel_ids() {
        let ids = parse_hotel_ids("iJhz, SjyX").expect("list parses");
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0].as_str(), "iJhz");
        assert_eq!(ids[1].as_str(), "SjyX");
    }

    #[test]
    fn blank_hotel_id_token_is_a_validation_error() {
        let error = parse_hotel_ids("iJhz,,SjyX").expect_err("must fail");
        assert!(matches!(error, CliError::Validation(_)));
    }

    #[test]
    fn parses_destination_integers() {
        let ids = parse_destination_ids("5432, 1122").expect("list parses");
        assert_eq!(ids, vec![5432, 1122]);
    }

    #[test]
    fn non_integer_destination_is_a_user_error() {
        let error = parse_destination_ids("5432,abc").expect_err("must fail");
        assert!(matches!(
            error,
            CliError::InvalidDestinationId { ref value } if value == "abc"
        ));
    }
}
