//! Every user-facing text of the application as one enum.

#[derive(Debug, Clone)]
pub enum Message {
    // === CALCULATION MESSAGES ===
    WorkRemaining {
        duration: String,
        required: String,
    },
    WorkRequirementMet {
        duration: String,
        required: String,
    },
    TotalBreakTime(String), // formatted duration
    LatePenalty,
    RejectedBreak(usize), // one-based break number

    // === SUMMARY VIEW MESSAGES ===
    SummaryHeader,
    BreaksHeader,
    NoBreaks,

    // === FORM MESSAGES ===
    PromptLoginTime,
    PromptLogoutTime,
    PromptAddBreak,
    PromptBreakOutTime(usize), // one-based break number
    PromptBreakInTime(usize),  // one-based break number
    InvalidBreakArgument(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigFileNotFound,
    ConfigReadFailed(String),  // config file path
    ConfigParseFailed(String), // config file path
    ConfigModulePolicy,
    PromptRequiredWork,
    PromptPenaltyThreshold,
    InvalidPolicyValue {
        field: String,
        value: String,
    },
}
