use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Multipart body of the import endpoints, documented for OpenAPI only.
#[derive(Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct ImportUploadDto {
    /// `.xlsx` workbook (first sheet) or `.csv` file with a header row.
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ImportRowErrorDto {
    /// 1-based spreadsheet row number, counting the header as row 1.
    pub row: usize,
    pub message: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ImportResultDto {
    pub total: usize,
    pub created: usize,
    pub updated: usize,
    pub failed: usize,
    pub errors: Vec<ImportRowErrorDto>,
}
