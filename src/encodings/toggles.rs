use anyhow::{anyhow, Result};
use std::fmt::Display;

/// The six switches selecting which implication directions the
/// complete-labelling encoder emits.
///
/// Each switch gates one direction of one labelling connective. Disabling
/// directions yields a smaller formula which remains sound but may stop being
/// a full characterization of the complete labellings, which is acceptable
/// when a single labelling is enough. The default subset keeps the encoding a
/// full characterization.
///
/// Toggle sets are parsed from a 6-character `0`/`1` string whose positions
/// follow the order of the fields below; the default set is `"101010"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingToggles {
    /// IN implies each attacker is OUT.
    pub in_to_attacker_out: bool,
    /// All attackers OUT implies IN.
    pub attackers_out_to_in: bool,
    /// OUT implies some attacker is IN.
    pub out_to_attacker_in: bool,
    /// An IN attacker implies OUT.
    pub attacker_in_to_out: bool,
    /// UNDEC implies no attacker is IN, and some attacker is UNDEC.
    pub undec_to_attacker_not_in: bool,
    /// An UNDEC attacker together with no IN attacker implies UNDEC.
    pub attacker_undec_to_undec: bool,
}

const DEFAULT_TOGGLES_STR: &str = "101010";

impl TryFrom<&str> for EncodingToggles {
    type Error = anyhow::Error;

    /// Parses a toggle set from its 6-character `0`/`1` string form.
    ///
    /// # Example
    ///
    /// ```
    /// # use argolab::encodings::EncodingToggles;
    /// let toggles = EncodingToggles::try_from("111111").unwrap();
    /// assert!(toggles.attackers_out_to_in);
    /// assert!(EncodingToggles::try_from("10101").is_err());
    /// ```
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let bits = s
            .chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => Err(anyhow!(r#"invalid encoding string "{}": unexpected character '{}'"#, s, c)),
            })
            .collect::<Result<Vec<bool>>>()?;
        if bits.len() != 6 {
            return Err(anyhow!(
                r#"invalid encoding string "{}": expected 6 characters, got {}"#,
                s,
                bits.len()
            ));
        }
        Ok(EncodingToggles {
            in_to_attacker_out: bits[0],
            attackers_out_to_in: bits[1],
            out_to_attacker_in: bits[2],
            attacker_in_to_out: bits[3],
            undec_to_attacker_not_in: bits[4],
            attacker_undec_to_undec: bits[5],
        })
    }
}

impl Default for EncodingToggles {
    fn default() -> Self {
        Self::try_from(DEFAULT_TOGGLES_STR).unwrap()
    }
}

impl Display for EncodingToggles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for b in [
            self.in_to_attacker_out,
            self.attackers_out_to_in,
            self.out_to_attacker_in,
            self.attacker_in_to_out,
            self.undec_to_attacker_not_in,
            self.attacker_undec_to_undec,
        ] {
            write!(f, "{}", u8::from(b))?;
        }
        Ok(())
    }
}
