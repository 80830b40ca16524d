use riffwave::WavErrorKind;
use riffwave::io::{ByteStore, ByteView, Guid, region};

#[test]
fn test_integer_decode_little_and_big_endian() {
	let bytes = [0x01u8, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

	assert_eq!(bytes[0..2].as_u16_le().unwrap(), 0x0201);
	assert_eq!(bytes[0..2].as_u16_be().unwrap(), 0x0102);
	assert_eq!(bytes[0..4].as_u32_le().unwrap(), 0x04030201);
	assert_eq!(bytes[0..4].as_u32_be().unwrap(), 0x01020304);
	assert_eq!(bytes.as_u64_le().unwrap(), 0x0807060504030201);
	assert_eq!(bytes.as_u64_be().unwrap(), 0x0102030405060708);
	assert_eq!([0xFEu8, 0xFF].as_i16_le().unwrap(), -2);
	assert_eq!([0xFFu8, 0xFE].as_i16_be().unwrap(), -2);
	assert_eq!([0xFFu8, 0xFF, 0xFF, 0xFF].as_i32_le().unwrap(), -1);
	assert_eq!([0x80u8, 0, 0, 0, 0, 0, 0, 0].as_i64_be().unwrap(), i64::MIN);
}

#[test]
fn test_i24_sign_extends_bit_23() {
	assert_eq!([0xFFu8, 0xFF, 0x7F].as_i24_le().unwrap(), 0x7FFFFF);
	assert_eq!([0x00u8, 0x00, 0x80].as_i24_le().unwrap(), -0x800000);
	assert_eq!([0xFFu8, 0xFF, 0xFF].as_i24_le().unwrap(), -1);
	assert_eq!([0x80u8, 0x00, 0x00].as_i24_be().unwrap(), -0x800000);
	assert_eq!([0x01u8, 0x02, 0x03].as_u24_le().unwrap(), 0x030201);
	assert_eq!([0x01u8, 0x02, 0x03].as_u24_be().unwrap(), 0x010203);
}

#[test]
fn test_float_decode_is_bit_exact() {
	let value = -1.2345678f32;
	assert_eq!(value.to_le_bytes().as_f32_le().unwrap().to_bits(), value.to_bits());
	assert_eq!(value.to_be_bytes().as_f32_be().unwrap().to_bits(), value.to_bits());

	let value = std::f64::consts::PI;
	assert_eq!(value.to_le_bytes().as_f64_le().unwrap(), value);
	assert_eq!(value.to_be_bytes().as_f64_be().unwrap(), value);

	let nan = f32::from_bits(0x7FC0_1234);
	assert_eq!(nan.to_le_bytes().as_f32_le().unwrap().to_bits(), 0x7FC0_1234);
}

#[test]
fn test_wrong_width_is_invalid_argument() {
	let bytes = [0u8; 5];

	for err in [
		bytes[..1].as_u16_le().unwrap_err(),
		bytes[..3].as_u16_be().unwrap_err(),
		bytes[..2].as_i24_le().unwrap_err(),
		bytes[..4].as_i24_le().unwrap_err(),
		bytes[..5].as_u32_le().unwrap_err(),
		bytes[..4].as_f64_le().unwrap_err(),
		bytes[..0].as_u8().unwrap_err(),
	] {
		assert_eq!(err.kind(), WavErrorKind::InvalidArgument);
	}
}

#[test]
fn test_store_is_inverse_of_decode() {
	let mut buf = [0u8; 8];

	buf[..2].store_u16_le(0xBEEF).unwrap();
	assert_eq!(buf[..2], [0xEF, 0xBE]);
	buf[..2].store_i16_be(-2).unwrap();
	assert_eq!(buf[..2], [0xFF, 0xFE]);

	buf[..3].store_i24_le(-0x123456).unwrap();
	assert_eq!(buf[..3].as_i24_le().unwrap(), -0x123456);
	buf[..3].store_i24_be(0x123456).unwrap();
	assert_eq!(buf[..3], [0x12, 0x34, 0x56]);

	buf[..4].store_f32_le(0.5).unwrap();
	assert_eq!(buf[..4].as_f32_le().unwrap(), 0.5);
	buf.store_f64_be(-0.25).unwrap();
	assert_eq!(buf.as_f64_be().unwrap(), -0.25);
	buf.store_i64_le(i64::MIN + 7).unwrap();
	assert_eq!(buf.as_i64_le().unwrap(), i64::MIN + 7);
	buf[..4].store_u32_be(0x01020304).unwrap();
	assert_eq!(buf[..4], [1, 2, 3, 4]);
}

#[test]
fn test_store_rejects_wrong_width_and_out_of_range_i24() {
	let mut buf = [0u8; 4];

	let err = buf.store_u16_le(1).unwrap_err();
	assert!(err.is_invalid_argument());

	let err = buf[..3].store_i24_le(0x800000).unwrap_err();
	assert!(err.is_invalid_argument());

	let err = buf[..3].store_i24_le(-0x800001).unwrap_err();
	assert!(err.is_invalid_argument());
}

#[test]
fn test_guid_uses_mixed_endian_layout() {
	let bytes = [
		0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x10, 0x00, 0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b, 0x71,
	];
	let guid = Guid::from_bytes(&bytes).unwrap();

	assert_eq!(guid.data1, 1);
	assert_eq!(guid.data2, 0);
	assert_eq!(guid.data3, 0x0010);
	assert_eq!(guid.data4, [0x80, 0x00, 0x00, 0xaa, 0x00, 0x38, 0x9b, 0x71]);
	assert_eq!(guid.to_string(), "00000001-0000-0010-8000-00aa00389b71");
	assert_eq!(guid.to_bytes(), bytes);

	let guid = Guid::new(0x11223344, 0x5566, 0x7788, [1, 2, 3, 4, 5, 6, 7, 8]);
	let mut out = [0u8; 16];
	guid.store(&mut out).unwrap();
	assert_eq!(out, [0x44, 0x33, 0x22, 0x11, 0x66, 0x55, 0x88, 0x77, 1, 2, 3, 4, 5, 6, 7, 8]);
	assert_eq!(Guid::from_bytes(&out).unwrap(), guid);

	assert!(Guid::from_bytes(&bytes[..15]).unwrap_err().is_invalid_argument());
}

#[test]
fn test_region_out_of_bounds_is_bad_format() {
	let buf = [1u8, 2, 3, 4];

	assert_eq!(region(&buf, 1, 3).unwrap(), &[2, 3, 4]);
	assert!(region(&buf, 2, 3).unwrap_err().is_bad_format());
	assert!(region(&buf, usize::MAX, 2).unwrap_err().is_bad_format());
}
