pub mod not_found;
pub mod workflow_event_bindings;
pub mod workflow_template;
