mod uploader;

pub use uploader::{HttpUploader, HttpUploaderConfig, UploadError};
