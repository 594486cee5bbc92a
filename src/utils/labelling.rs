use crate::aa::{AAFramework, Argument, LabelType};

/// A complete labelling of an AA framework.
///
/// Each argument is given exactly one of the three labels IN, OUT or UNDEC.
/// The set of IN arguments is the extension associated with the labelling.
pub struct Labelling<'a, T>
where
    T: LabelType,
{
    ins: Vec<&'a Argument<T>>,
    outs: Vec<&'a Argument<T>>,
    undecs: Vec<&'a Argument<T>>,
    in_flags: Vec<bool>,
}

impl<'a, T> Labelling<'a, T>
where
    T: LabelType,
{
    /// Builds a labelling from a SAT model over the three variable blocks.
    ///
    /// The model must cover at least `3n` variables, where `n` is the number
    /// of arguments in the framework: variables `[0, n)` encode IN, `[n, 2n)`
    /// encode OUT and `[2n, 3n)` encode UNDEC. The encodings guarantee that
    /// exactly one block holds each argument.
    pub fn from_model(af: &'a AAFramework<T>, model: &[bool]) -> Self {
        let n = af.n_arguments();
        debug_assert!(model.len() >= 3 * n);
        let mut labelling = Labelling {
            ins: Vec::new(),
            outs: Vec::new(),
            undecs: Vec::new(),
            in_flags: vec![false; n],
        };
        for arg in af.argument_set().iter() {
            let id = arg.id();
            if model[id] {
                labelling.ins.push(arg);
                labelling.in_flags[id] = true;
            } else if model[n + id] {
                labelling.outs.push(arg);
            } else {
                labelling.undecs.push(arg);
            }
        }
        labelling
    }

    /// Builds the labelling in which every argument is UNDEC.
    pub fn all_undec(af: &'a AAFramework<T>) -> Self {
        Labelling {
            ins: Vec::new(),
            outs: Vec::new(),
            undecs: af.argument_set().iter().collect(),
            in_flags: vec![false; af.n_arguments()],
        }
    }

    /// Returns the arguments labelled IN, in increasing id order.
    pub fn ins(&self) -> &[&'a Argument<T>] {
        &self.ins
    }

    /// Returns the arguments labelled OUT, in increasing id order.
    pub fn outs(&self) -> &[&'a Argument<T>] {
        &self.outs
    }

    /// Returns the arguments labelled UNDEC, in increasing id order.
    pub fn undecs(&self) -> &[&'a Argument<T>] {
        &self.undecs
    }

    /// Returns `true` iff the argument with the given id is labelled IN.
    pub fn has_in(&self, id: usize) -> bool {
        self.in_flags[id]
    }

    /// Returns the extension associated with this labelling (its IN arguments).
    pub fn extension(&self) -> Vec<&'a Argument<T>> {
        self.ins.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aa::ArgumentSet;

    fn toy_framework() -> AAFramework<String> {
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        AAFramework::new_with_argument_set(ArgumentSet::new_with_labels(&labels))
    }

    #[test]
    fn test_from_model() {
        let af = toy_framework();
        let mut model = vec![false; 9];
        model[0] = true; // a is IN
        model[3 + 1] = true; // b is OUT
        model[6 + 2] = true; // c is UNDEC
        let labelling = Labelling::from_model(&af, &model);
        assert_eq!(vec!["a"], labels_of(labelling.ins()));
        assert_eq!(vec!["b"], labels_of(labelling.outs()));
        assert_eq!(vec!["c"], labels_of(labelling.undecs()));
        assert!(labelling.has_in(0));
        assert!(!labelling.has_in(1));
        assert!(!labelling.has_in(2));
    }

    #[test]
    fn test_all_undec() {
        let af = toy_framework();
        let labelling = Labelling::all_undec(&af);
        assert!(labelling.ins().is_empty());
        assert!(labelling.outs().is_empty());
        assert_eq!(3, labelling.undecs().len());
    }

    #[test]
    fn test_extension() {
        let af = toy_framework();
        let mut model = vec![false; 9];
        model[0] = true;
        model[2] = true;
        model[3 + 1] = true;
        let labelling = Labelling::from_model(&af, &model);
        assert_eq!(vec!["a", "c"], labels_of(&labelling.extension()));
    }

    fn labels_of<'a>(args: &[&'a Argument<String>]) -> Vec<&'a str> {
        args.iter().map(|a| a.label().as_str()).collect()
    }
}
