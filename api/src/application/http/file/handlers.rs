pub mod upload_image;
