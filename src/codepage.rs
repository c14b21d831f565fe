//! Text encodings used by archive entry names.
//!
//! Zip tooling that ignores the UTF-8 flag reads every entry name as IBM
//! code page 437. Archives built on Japanese Windows store Shift_JIS
//! (cp932) bytes instead, so the names come out garbled. [`recode`] undoes
//! that by turning the garbled text back into its original bytes and
//! decoding them under the real encoding.

use crate::error::{Result, ToolError};
use codepage_437::{FromCp437, ToCp437, CP437_CONTROL};
use encoding_rs::Encoding;
use std::borrow::Cow;
use std::fmt;

/// Encoding assumed by zip readers for entries without the UTF-8 flag
pub const ZIP_DEFAULT_CODEPAGE: Codepage = Codepage::Cp437;

/// Supported text encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Codepage {
    /// IBM PC code page 437
    Cp437,
    /// Windows code page 932 (Shift_JIS)
    #[default]
    Cp932,
    /// Windows code page 936 (GBK)
    Gbk,
    /// Windows code page 949 (EUC-KR / Unified Hangul Code)
    EucKr,
    /// Windows code page 950 (Big5)
    Big5,
    /// Windows code page 1252 (Western European)
    Windows1252,
    Utf8,
}

impl Codepage {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cp437 => "cp437",
            Self::Cp932 => "cp932",
            Self::Gbk => "gbk",
            Self::EucKr => "euc-kr",
            Self::Big5 => "big5",
            Self::Windows1252 => "windows-1252",
            Self::Utf8 => "utf-8",
        }
    }

    /// WHATWG encoder backing this code page; cp437 is handled separately
    fn backend(&self) -> Option<&'static Encoding> {
        match self {
            Self::Cp437 => None,
            Self::Cp932 => Some(encoding_rs::SHIFT_JIS),
            Self::Gbk => Some(encoding_rs::GBK),
            Self::EucKr => Some(encoding_rs::EUC_KR),
            Self::Big5 => Some(encoding_rs::BIG5),
            Self::Windows1252 => Some(encoding_rs::WINDOWS_1252),
            Self::Utf8 => Some(encoding_rs::UTF_8),
        }
    }

    /// Encode text into this code page, failing on any unmappable character
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        let unencodable = || ToolError::Unencodable {
            codepage: *self,
            text: text.to_string(),
        };

        match self.backend() {
            None => {
                let bytes: Cow<[u8]> = text.to_cp437(&CP437_CONTROL).map_err(|_| unencodable())?;
                Ok(bytes.into_owned())
            }
            Some(encoding) => {
                let (bytes, _, had_errors) = encoding.encode(text);
                if had_errors {
                    return Err(unencodable());
                }
                Ok(bytes.into_owned())
            }
        }
    }

    /// Decode bytes under this code page without replacement characters
    pub fn decode(&self, bytes: &[u8]) -> Result<String> {
        match self.backend() {
            // Every byte has a cp437 mapping
            None => Ok(String::from_cp437(bytes.to_vec(), &CP437_CONTROL)),
            Some(encoding) => encoding
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(Cow::into_owned)
                .ok_or_else(|| ToolError::Undecodable {
                    codepage: *self,
                    bytes: hex::encode(bytes),
                }),
        }
    }
}

impl fmt::Display for Codepage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Codepage {
    type Err = ToolError;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "cp437" | "ibm437" | "437" => Ok(Self::Cp437),
            "cp932" | "ms932" | "windows-31j" | "shift_jis" | "shift-jis" | "sjis" => {
                Ok(Self::Cp932)
            }
            "gbk" | "cp936" => Ok(Self::Gbk),
            "euc-kr" | "cp949" => Ok(Self::EucKr),
            "big5" | "cp950" => Ok(Self::Big5),
            "windows-1252" | "cp1252" => Ok(Self::Windows1252),
            "utf-8" | "utf8" => Ok(Self::Utf8),
            _ => Err(ToolError::UnknownCodepage(s.to_string())),
        }
    }
}

/// Decode a raw entry name under its true encoding
pub fn decode_name(raw: &[u8], actual: Codepage) -> Result<String> {
    actual.decode(raw)
}

/// Repair text that was decoded under `assumed` when its bytes were really `actual`
pub fn recode(misdecoded: &str, assumed: Codepage, actual: Codepage) -> Result<String> {
    let raw = assumed.encode(misdecoded)?;
    decode_name(&raw, actual)
}

/// Correct an entry name given the reader's decoding and the stored bytes
///
/// Names the reader decoded as cp437 go straight from their raw bytes to
/// `actual`. Names the reader decoded some other way (the UTF-8 flag) are
/// repaired from that text with [`recode`], which rejects anything cp437
/// cannot represent.
pub fn correct_entry_name(stored: &str, raw: &[u8], actual: Codepage) -> Result<String> {
    if ZIP_DEFAULT_CODEPAGE.decode(raw)? == stored {
        decode_name(raw, actual)
    } else {
        recode(stored, ZIP_DEFAULT_CODEPAGE, actual)
    }
}
