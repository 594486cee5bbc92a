use crate::aa::{AAFramework, ArgumentSet};
use anyhow::{anyhow, Context, Result};
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use std::io::{BufRead, BufReader, Read};

const ARG_AND_SPACE_PATTERN: &str = r"\s*[_[:alpha:]][_[:alpha:]\d]*\s*";

lazy_static! {
    static ref ARG_LINE_PATTERN: Regex = Regex::new(r"^\s*arg\([^)]+\).\s*$").unwrap();
    static ref ARG_LINE_ARG_NAME_PATTERN: Regex =
        Regex::new(&format!(r"^\s*arg\(({})\).\s*$", ARG_AND_SPACE_PATTERN)).unwrap();
    static ref ATT_LINE_PATTERN: Regex = Regex::new(r"^\s*att\([^,]+,[^)]+\).\s*$").unwrap();
    static ref ATT_LINE_ARG_NAMES_PATTERN: Regex = Regex::new(&format!(
        r"^\s*att\(({}),({})\).\s*$",
        ARG_AND_SPACE_PATTERN, ARG_AND_SPACE_PATTERN,
    ))
    .unwrap();
}

const DEFAULT_ARG_LABELS_CAP: usize = 1 << 10;

fn captured_arg(c: &Captures, i: usize) -> String {
    c.get(i).unwrap().as_str().trim().to_string()
}

fn try_read_arg_line(l: &str) -> Result<Option<String>> {
    if ARG_LINE_PATTERN.is_match(l) {
        match ARG_LINE_ARG_NAME_PATTERN.captures(l) {
            Some(c) => Ok(Some(captured_arg(&c, 1))),
            None => Err(anyhow!("invalid argument name in {}", l.trim())),
        }
    } else {
        Ok(None)
    }
}

fn try_read_att_line(l: &str) -> Result<Option<(String, String)>> {
    if ATT_LINE_PATTERN.is_match(l) {
        match ATT_LINE_ARG_NAMES_PATTERN.captures(l) {
            Some(c) => Ok(Some((captured_arg(&c, 1), captured_arg(&c, 2)))),
            None => Err(anyhow!("invalid argument names in {}", l.trim())),
        }
    } else {
        Ok(None)
    }
}

/// A reader for the Aspartix format.
///
/// This object is used to read an [`AAFramework`] encoded using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html).
/// The [LabelType](crate::aa::LabelType) of the returned argument frameworks is [String].
///
/// # Aspartix format
///
/// The following content defines an Argumentation Framework with three arguments labelled `a`, `b` and `c` and three attacks (`a` and `b` attack each other and `c` attacks `b`).
///
/// ```text
/// arg(a).
/// arg(b).
/// arg(c).
/// att(a,b).
/// att(b,a).
/// att(c,b).
/// ```
///
/// Argument declarations must all precede the attack declarations, and an
/// attack referring to an undeclared argument is an error.
///
/// # Example
///
/// ```
/// # use argolab::aa::AAFramework;
/// # use argolab::io::AspartixReader;
/// fn read_af_from_str(s: &str) -> AAFramework<String> {
///     let reader = AspartixReader::default();
///     reader.read(&mut s.as_bytes()).expect("invalid Aspartix AF")
/// }
/// # read_af_from_str("arg(a).");
/// ```
#[derive(Default)]
pub struct AspartixReader {}

impl AspartixReader {
    /// Reads an [`AAFramework`] from an Aspartix stream.
    pub fn read(&self, reader: &mut dyn Read) -> Result<AAFramework<String>> {
        let mut arg_labels = Vec::with_capacity(DEFAULT_ARG_LABELS_CAP);
        let mut af = None;
        let br = BufReader::new(reader);
        for (i, line) in br.lines().enumerate() {
            let context = || format!("while reading line with index {}", i);
            let l = &line.with_context(context)?;
            if l.trim().is_empty() {
                continue;
            }
            if let Some(a) = try_read_arg_line(l).with_context(context)? {
                if af.is_some() {
                    return Err(anyhow!("found an argument declaration after an attack"))
                        .with_context(context);
                }
                arg_labels.push(a);
                continue;
            }
            if let Some((a, b)) = try_read_att_line(l).with_context(context)? {
                if af.is_none() {
                    af = Some(AAFramework::new_with_argument_set(
                        ArgumentSet::new_with_labels(&arg_labels),
                    ));
                }
                af.as_mut()
                    .unwrap()
                    .new_attack(&a, &b)
                    .with_context(context)?;
                continue;
            }
            return Err(anyhow!("syntax error in line \"{}\"", l)).with_context(context);
        }
        match af {
            Some(a) => Ok(a),
            None => Ok(AAFramework::new_with_argument_set(
                ArgumentSet::new_with_labels(&arg_labels),
            )),
        }
    }
}
