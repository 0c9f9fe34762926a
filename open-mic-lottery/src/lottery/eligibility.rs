use super::Error;
use crate::signups::{SignupRow, COMEDIAN_SIGNUP};

/// A comedian who checked in and has not performed yet.
pub fn is_eligible(signup: &SignupRow) -> bool {
    signup.signup_type == COMEDIAN_SIGNUP && signup.here && !signup.done
}

/// Eligible signups, in sheet order.
pub fn eligible_signups(signups: &[SignupRow]) -> Result<Vec<&SignupRow>, Error> {
    let eligible: Vec<&SignupRow> = signups.iter().filter(|signup| is_eligible(signup)).collect();
    if eligible.is_empty() {
        return Err(Error::NoEligibleCandidates);
    }
    Ok(eligible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_strategy::proptest;

    fn signup(signup_type: &str, done: bool, here: bool) -> SignupRow {
        SignupRow {
            signup_type: signup_type.to_string(),
            done,
            here,
            ..SignupRow::dummy("someone", false, false)
        }
    }

    #[proptest]
    fn eligible_iff_comedian_here_and_not_done(
        #[strategy(prop_oneof![Just("comedian"), Just("Comedian"), Just("audience"), Just("")])]
        signup_type: &'static str,
        done: bool,
        here: bool,
        first_5: bool,
        early: bool,
    ) {
        let row = SignupRow {
            first_5,
            early,
            ..signup(signup_type, done, here)
        };
        prop_assert_eq!(
            is_eligible(&row),
            signup_type == "comedian" && here && !done
        );
    }

    #[test]
    fn keeps_sheet_order() {
        let signups = vec![
            SignupRow::dummy("c", false, false),
            signup("audience", false, true),
            SignupRow::dummy("a", true, false),
            signup("comedian", true, true),
            SignupRow::dummy("b", false, true),
        ];
        let names: Vec<&str> = eligible_signups(&signups)
            .unwrap()
            .into_iter()
            .map(|signup| signup.full_name.as_str())
            .collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn empty_selection_is_an_error() {
        assert_eq!(eligible_signups(&[]), Err(Error::NoEligibleCandidates));
        let signups = vec![signup("comedian", true, true), signup("comedian", false, false)];
        assert_eq!(eligible_signups(&signups), Err(Error::NoEligibleCandidates));
    }
}
