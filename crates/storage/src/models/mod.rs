mod class;
mod group;

pub use class::ClassRow;
pub use group::GroupRow;

/// A group together with its full class list, in submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSchedule {
    pub group: GroupRow,
    pub classes: Vec<ClassRow>,
}
