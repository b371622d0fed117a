//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use wordshape::io::error::{computation_error, configuration_error, validation_error};
    use wordshape::{CloudError, ErrorKind};

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = CloudError::FileSystem {
            path: "/tmp/input.txt".into(),
            operation: "read input",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(error.to_string().contains("read input"));
    }

    // Tests validation errors name the field
    // Verified by omitting the field from the message
    #[test]
    fn test_validation_error() {
        let error = validation_error("text", &"input is empty");

        assert_eq!(error.kind(), ErrorKind::Validation);
        let message = error.to_string();
        assert!(message.contains("text"));
        assert!(message.contains("input is empty"));
        assert!(error.source().is_none());
    }

    // Tests configuration errors contain all fields
    // Verified by omitting value from message
    #[test]
    fn test_configuration_error() {
        let error = configuration_error("shape", &"hexagon", &"unknown shape");

        assert_eq!(error.kind(), ErrorKind::Configuration);
        let message = error.to_string();
        assert!(message.contains("shape"));
        assert!(message.contains("hexagon"));
        assert!(message.contains("unknown shape"));
    }

    // Tests resource errors carry the path
    // Verified by omitting the path from the message
    #[test]
    fn test_resource_error() {
        let error = CloudError::Resource {
            path: PathBuf::from("fonts/Missing.ttf"),
            reason: "not found".to_string(),
        };

        assert_eq!(error.kind(), ErrorKind::Resource);
        assert!(error.to_string().contains("fonts/Missing.ttf"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));
        let error = CloudError::ImageExport {
            path: PathBuf::from("/readonly/cloud.png"),
            source: image_error,
        };

        assert_eq!(error.kind(), ErrorKind::Io);
        assert!(error.source().is_some());
        let message = error.to_string();
        assert!(message.contains("/readonly/cloud.png"));
        assert!(message.contains("access denied"));
    }

    // Tests computation errors name the operation
    // Verified by dropping the operation name
    #[test]
    fn test_computation_error() {
        let error = computation_error("spline fit", &"too few knots");

        assert_eq!(error.kind(), ErrorKind::Computation);
        assert!(error.to_string().contains("spline fit"));
    }

    // Tests conversion from std::io::Error
    // Verified by changing conversion logic
    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::other("disk full");
        let error: CloudError = io_error.into();

        assert!(matches!(error, CloudError::FileSystem { .. }));
        assert!(error.to_string().contains("disk full"));
    }
}
