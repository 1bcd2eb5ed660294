use crate::utils::Float;

/// Represents a time duration.
pub type Duration = Float;

/// Represents a timestamp.
pub type Timestamp = Float;

/// Represents a distance.
pub type Distance = Float;

/// Specifies cost value.
pub type Cost = Float;

/// Specifies location type.
pub type Location = usize;

/// Represents a routing profile: an index of the routing matrix used by a vehicle.
pub type Profile = usize;
