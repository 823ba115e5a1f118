use crate::api::{Parameter, ParameterInner, PositionalInner, SwitchInner, ValuedFlagInner};

/// The parameters, partitioned by role.
/// Each partition keeps the order in which its parameters were added.
pub(crate) struct Classified<'a> {
    pub(crate) positionals: Vec<PositionalInner<'a>>,
    pub(crate) valued_flags: Vec<ValuedFlagInner<'a>>,
    pub(crate) switches: Vec<SwitchInner<'a>>,
}

pub(crate) fn classify(parameters: Vec<Parameter<'_>>) -> Classified<'_> {
    let mut positionals = Vec::default();
    let mut valued_flags = Vec::default();
    let mut switches = Vec::default();

    for parameter in parameters {
        match parameter.consume() {
            ParameterInner::Positional(p) => positionals.push(p),
            ParameterInner::ValuedFlag(o) => valued_flags.push(o),
            ParameterInner::Switch(s) => switches.push(s),
        }
    }

    Classified {
        positionals,
        valued_flags,
        switches,
    }
}
