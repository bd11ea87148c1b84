//! Input records for the example. Identifiers are assigned by storage, so
//! the inputs carry none.

#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub ename: String,
    pub salary: f64,
    pub deg: String,
}
