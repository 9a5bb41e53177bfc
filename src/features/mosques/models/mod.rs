pub mod donation;
pub mod mosque;

pub use donation::{Donation, DonationPriority, NewDonation};
pub use mosque::{Mosque, MosqueSize, NewMosque};
