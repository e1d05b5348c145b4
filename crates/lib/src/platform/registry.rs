//! Read-only registry access on Windows.

use std::ffi::{OsStr, OsString};
use std::os::windows::ffi::{OsStrExt, OsStringExt};

use windows_sys::Win32::Foundation::ERROR_SUCCESS;
use windows_sys::Win32::System::Registry::{
  HKEY_LOCAL_MACHINE, RRF_NOEXPAND, RRF_RT_REG_EXPAND_SZ, RRF_RT_REG_SZ, RRF_SUBKEY_WOW6432KEY,
  RRF_SUBKEY_WOW6464KEY, RegGetValueW,
};

use super::env::RegistryView;

fn to_wide(s: &str) -> Vec<u16> {
  OsStr::new(s).encode_wide().chain(Some(0)).collect()
}

/// Reads a `REG_SZ` or `REG_EXPAND_SZ` value below `HKEY_LOCAL_MACHINE` from the
/// requested view. Expandable values are returned unexpanded.
///
/// Any failure (missing key, missing value, wrong type) is reported as `None`.
pub fn read_hklm_string(subkey: &str, value: &str, view: RegistryView) -> Option<String> {
  let subkey_wide = to_wide(subkey);
  let value_wide = to_wide(value);
  let flags = RRF_RT_REG_SZ
    | RRF_RT_REG_EXPAND_SZ
    | RRF_NOEXPAND
    | match view {
      RegistryView::Bits32 => RRF_SUBKEY_WOW6432KEY,
      RegistryView::Bits64 => RRF_SUBKEY_WOW6464KEY,
    };

  // First call sizes the buffer (in bytes, terminator included).
  let mut size: u32 = 0;
  // SAFETY: both strings are NUL-terminated and outlive the call; a null data
  // pointer asks only for the size.
  let status = unsafe {
    RegGetValueW(
      HKEY_LOCAL_MACHINE,
      subkey_wide.as_ptr(),
      value_wide.as_ptr(),
      flags,
      std::ptr::null_mut(),
      std::ptr::null_mut(),
      &mut size,
    )
  };
  if status != ERROR_SUCCESS || size == 0 {
    return None;
  }

  let mut buffer = vec![0u16; (size as usize).div_ceil(2)];
  // SAFETY: `buffer` holds at least `size` bytes.
  let status = unsafe {
    RegGetValueW(
      HKEY_LOCAL_MACHINE,
      subkey_wide.as_ptr(),
      value_wide.as_ptr(),
      flags,
      std::ptr::null_mut(),
      buffer.as_mut_ptr().cast(),
      &mut size,
    )
  };
  if status != ERROR_SUCCESS {
    return None;
  }

  let len = buffer.iter().position(|&c| c == 0).unwrap_or(buffer.len());
  Some(OsString::from_wide(&buffer[..len]).to_string_lossy().into_owned())
}
