/// Field rule validator for goods introduction documents.
#[derive(Debug, Default, Clone, Copy)]
pub struct Validator;
