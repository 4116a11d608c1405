use thiserror::Error;

/// Bytes in one mebibyte.
pub const MIB: u64 = 1024 * 1024;

/// A file picked in a file input, as reported by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDescriptor {
    pub name: String,
    pub size_bytes: u64,
}

impl FileDescriptor {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }

    pub fn size_mib(&self) -> f64 {
        self.size_bytes as f64 / 1024.0 / 1024.0
    }
}

/// A file that passed the upload policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    pub file: FileDescriptor,
    /// Lowercased suffix after the last `.`.
    pub extension: String,
}

/// Why a selected file was refused. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("Please upload a {} file only.", .expected.to_uppercase())]
    WrongFormat { expected: String, actual: String },
    #[error("File size must be less than {max_mib}MB.")]
    TooLarge { size_bytes: u64, max_mib: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    /// Compared case-insensitively, without the leading dot.
    pub allowed_extension: String,
    pub max_size_mib: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            allowed_extension: "csv".to_string(),
            max_size_mib: 16,
        }
    }
}

impl UploadPolicy {
    /// Checks the extension first, then the size. A file of exactly
    /// `max_size_mib` MiB is accepted.
    pub fn check(&self, file: FileDescriptor) -> Result<FileSelection, PolicyViolation> {
        let extension = extension_of(&file.name);
        if !extension.eq_ignore_ascii_case(&self.allowed_extension) {
            return Err(PolicyViolation::WrongFormat {
                expected: self.allowed_extension.to_ascii_lowercase(),
                actual: extension,
            });
        }

        if file.size_bytes > self.max_size_bytes() {
            return Err(PolicyViolation::TooLarge {
                size_bytes: file.size_bytes,
                max_mib: self.max_size_mib,
            });
        }

        Ok(FileSelection { file, extension })
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_mib.saturating_mul(MIB)
    }
}

/// Lowercased text after the last `.`. A name without a dot is its own
/// extension, so `csv` alone passes as a CSV file.
pub fn extension_of(name: &str) -> String {
    name.rsplit('.').next().unwrap_or(name).to_ascii_lowercase()
}
