use crate::aa::{AAFramework, Argument, LabelType};
use anyhow::{Context, Result};
use std::io::Write;

/// A writer for the Aspartix format and the associated query answers.
///
/// This object is used to write an [`AAFramework`] using the Aspartix input format, as defined on [the Aspartix website](https://www.dbai.tuwien.ac.at/research/argumentation/aspartix/dung.html),
/// and to render query answers (extensions, extension sets and acceptance
/// statuses) the way ICCMA solvers print them.
#[derive(Default)]
pub struct AspartixWriter {}

impl AspartixWriter {
    /// Writes a framework using the Aspartix format to the provided writer.
    ///
    /// # Example
    ///
    /// ```
    /// # use argolab::aa::{AAFramework, ArgumentSet, LabelType};
    /// # use argolab::io::AspartixWriter;
    /// # use anyhow::Result;
    /// fn write_af_to_stdout<T: LabelType>(af: &AAFramework<T>) -> Result<()> {
    ///     let writer = AspartixWriter::default();
    ///     writer.write_framework(&af, &mut std::io::stdout())
    /// }
    /// # write_af_to_stdout(&AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&[] as &[String])));
    /// ```
    pub fn write_framework<T: LabelType>(
        &self,
        framework: &AAFramework<T>,
        writer: &mut dyn Write,
    ) -> Result<()> {
        let args = framework.argument_set();
        for arg in args.iter() {
            writeln!(writer, "arg({}).", arg)?;
        }
        for attack in framework.iter_attacks() {
            writeln!(writer, "att({},{}).", attack.attacker(), attack.attacked())?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Writes a single extension, as in `[a,b]`.
    pub fn write_single_extension<T: LabelType>(
        &self,
        writer: &mut dyn Write,
        extension: &[&Argument<T>],
    ) -> Result<()> {
        let context = "while writing an extension";
        write_extension_content(writer, extension).context(context)?;
        writeln!(writer).context(context)?;
        writer.flush().context(context)
    }

    /// Writes a set of extensions, as in `[[a,b],[c]]`.
    pub fn write_extension_set<T: LabelType>(
        &self,
        writer: &mut dyn Write,
        extensions: &[Vec<&Argument<T>>],
    ) -> Result<()> {
        let context = "while writing an extension set";
        write!(writer, "[").context(context)?;
        let mut first = true;
        for extension in extensions {
            if first {
                first = false;
            } else {
                write!(writer, ",").context(context)?;
            }
            write_extension_content(writer, extension).context(context)?;
        }
        writeln!(writer, "]").context(context)?;
        writer.flush().context(context)
    }

    /// Writes the answer for a query with no extension.
    pub fn write_no_extension(&self, writer: &mut dyn Write) -> Result<()> {
        let context = "while writing problem has no extension";
        writeln!(writer, "NO").context(context)?;
        writer.flush().context(context)
    }

    /// Writes an acceptance status (`YES` or `NO`).
    pub fn write_acceptance_status(
        &self,
        writer: &mut dyn Write,
        acceptance_status: bool,
    ) -> Result<()> {
        let context = "while writing an acceptance status";
        writeln!(writer, "{}", if acceptance_status { "YES" } else { "NO" }).context(context)?;
        writer.flush().context(context)
    }
}

fn write_extension_content<T: LabelType>(
    writer: &mut dyn Write,
    extension: &[&Argument<T>],
) -> Result<()> {
    write!(writer, "[")?;
    let mut first = true;
    for arg in extension {
        if first {
            first = false;
            write!(writer, "{}", arg)?;
        } else {
            write!(writer, ",{}", arg)?;
        }
    }
    write!(writer, "]")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;
    use std::io::BufWriter;

    fn written(buffer: BufWriter<Vec<u8>>) -> String {
        String::from_utf8(buffer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_write_af() {
        let arg_names = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_names);
        let mut framework = AAFramework::new_with_argument_set(args);
        framework.new_attack(&arg_names[0], &arg_names[0]).unwrap();
        framework.new_attack(&arg_names[1], &arg_names[2]).unwrap();
        let mut buffer = BufWriter::new(Vec::new());
        let writer = AspartixWriter::default();
        writer.write_framework(&framework, &mut buffer).unwrap();
        assert_eq!(
            "arg(a).\narg(b).\narg(c).\natt(a,a).\natt(b,c).\n",
            written(buffer)
        )
    }

    #[test]
    fn test_write_single_extension() {
        let arg_names = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_names);
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        writer
            .write_single_extension(&mut buffer, &args.iter().collect::<Vec<_>>())
            .unwrap();
        assert_eq!("[a,b,c]\n", written(buffer));
    }

    #[test]
    fn test_write_empty_extension() {
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        writer
            .write_single_extension(&mut buffer, &[] as &[&Argument<String>])
            .unwrap();
        assert_eq!("[]\n", written(buffer));
    }

    #[test]
    fn test_write_extension_set() {
        let arg_names = vec!["a".to_string(), "b".to_string()];
        let args = ArgumentSet::new_with_labels(&arg_names);
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        let extensions = vec![
            vec![args.get_argument_by_id(0)],
            vec![args.get_argument_by_id(1)],
        ];
        writer.write_extension_set(&mut buffer, &extensions).unwrap();
        assert_eq!("[[a],[b]]\n", written(buffer));
    }

    #[test]
    fn test_write_empty_extension_set() {
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        writer
            .write_extension_set(&mut buffer, &[] as &[Vec<&Argument<String>>])
            .unwrap();
        assert_eq!("[]\n", written(buffer));
    }

    #[test]
    fn test_write_no_extension() {
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        writer.write_no_extension(&mut buffer).unwrap();
        assert_eq!("NO\n", written(buffer));
    }

    #[test]
    fn test_write_acceptance_status_yes() {
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        writer.write_acceptance_status(&mut buffer, true).unwrap();
        assert_eq!("YES\n", written(buffer));
    }

    #[test]
    fn test_write_acceptance_status_no() {
        let writer = AspartixWriter::default();
        let mut buffer = BufWriter::new(Vec::new());
        writer.write_acceptance_status(&mut buffer, false).unwrap();
        assert_eq!("NO\n", written(buffer));
    }
}
