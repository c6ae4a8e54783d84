/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [tokenizer](crate::parser::tokenizer) and [parser](crate::parser)
    pub const PARSER: &str = "parser";

    /// Logs related to [evaluation](crate::procedures::evaluate)
    pub const EVALUATION: &str = "evaluation";

    /// Logs related to truth [table](crate::structures::table) enumeration
    pub const TABLE: &str = "table";

    /// Logs related to [normal form](crate::procedures::normal_form) synthesis
    pub const NORMAL_FORM: &str = "normal_form";

    /// Logs related to [entailment](crate::procedures::infer)
    pub const INFERENCE: &str = "inference";

    /// Logs related to [proof](crate::proof) search
    pub const PROOF: &str = "proof";
}
