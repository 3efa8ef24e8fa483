//! Roster projection: group selection → person `<select>` options

mod mapping;
mod options;
mod selection;
mod selector;

pub use mapping::RosterMapping;
pub use options::{group_options, SelectOption, CHOOSE_GROUP_LABEL, TEACHERS_GROUP_LABEL};
pub use selection::{GroupSelection, SelectionState, TEACHERS_SENTINEL};
pub use selector::{
    member_label, render, ChoosePrompt, EmptyValuePolicy, LabelFormat, PlaceholderPolicy,
    RosterSelector, SelectorConfig, SortOrder, CHOOSE_STUDENT_LABEL, CHOOSE_USER_LABEL,
    NOT_FOUND_LABEL, NO_GROUP_LABEL,
};
