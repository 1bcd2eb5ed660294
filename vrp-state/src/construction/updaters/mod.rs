//! Contains state updaters: route visitors which propagate derived values along routes and
//! write them into the state store.

mod activity_times;
pub use self::activity_times::*;

mod costs;
pub use self::costs::*;

mod loads;
pub use self::loads::*;

mod max_time_in_vehicle;
pub use self::max_time_in_vehicle::*;

mod practical_time_windows;
pub use self::practical_time_windows::*;

mod skills;
pub use self::skills::*;

mod vehicles;
pub use self::vehicles::*;

mod waiting;
pub use self::waiting::*;
