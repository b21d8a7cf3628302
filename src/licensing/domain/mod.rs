pub mod artifact;
pub mod coalesced_license;
pub mod dual_license;
pub mod license_name;
pub mod report;
pub mod requirements;

pub use artifact::{ArtifactId, ArtifactWithLicenses};
pub use coalesced_license::CoalescedLicense;
pub use dual_license::DualLicense;
pub use report::LicensingReport;
pub use requirements::LicensingRequirements;
