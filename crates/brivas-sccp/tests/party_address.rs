//! Party Address Integration Tests
//!
//! Wire-level scenarios for the Called/Calling Party Address codec

use brivas_sccp::{
    ssn, AddressIndicator, GlobalTitle, PartyAddress, PointCode, SccpConfig, SccpError,
};
use std::sync::Once;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

fn gti4_address() -> anyhow::Result<PartyAddress> {
    let gt = GlobalTitle {
        translation_type: 0,
        numbering_plan: 1,
        encoding_scheme: 2,
        nature_of_address: 3,
        global_title_info: vec![0x21, 0x43],
    };
    Ok(PartyAddress::new(AddressIndicator(0x12), 0, 6, gt)?)
}

#[test]
fn gti4_address_round_trips() -> anyhow::Result<()> {
    init_tracing();

    let addr = gti4_address()?;
    let wire = addr.serialize()?;
    assert_eq!(&wire[..], &[0x07, 0x12, 0x06, 0x00, 0x12, 0x03, 0x21, 0x43]);
    assert_eq!(addr.length(), 7);

    let parsed = PartyAddress::parse(&wire)?;
    assert_eq!(parsed, addr);
    assert_eq!(parsed.gti(), 4);
    assert_eq!(parsed.subsystem_number, ssn::HLR);
    assert_eq!(parsed.digits(), "1234");
    Ok(())
}

#[test]
fn empty_address_is_two_octets() -> anyhow::Result<()> {
    init_tracing();

    let addr = PartyAddress::new(AddressIndicator(0x00), 0, 0, GlobalTitle::default())?;
    assert_eq!(&addr.serialize()?[..], &[0x01, 0x00]);
    assert_eq!(addr.length(), 1);
    assert_eq!(PartyAddress::parse(&[0x01, 0x00])?, addr);
    Ok(())
}

#[test]
fn header_only_buffer_is_truncated() {
    init_tracing();

    let err = PartyAddress::parse(&[0x07, 0x12]).unwrap_err();
    assert!(matches!(err, SccpError::TruncatedInput { .. }));
}

#[test]
fn declared_length_beyond_buffer_is_truncated() {
    init_tracing();

    // length 8 needs nine octets, buffer holds eight
    let data = [0x08, 0x12, 0x06, 0x00, 0x12, 0x03, 0x21, 0x43];
    let err = PartyAddress::parse(&data).unwrap_err();
    assert_eq!(err, SccpError::TruncatedInput { needed: 9, available: 8 });

    // length equal to buffer size
    let data = [0x04, 0x00, 0x21, 0x43];
    assert!(PartyAddress::parse(&data).unwrap_err().is_truncated());
}

#[test]
fn declared_length_below_fixed_fields_is_mismatch() {
    init_tracing();

    // PC + SSN + GTI 4 header need 8 octets, length only covers 4
    let data = [0x03, 0x13, 0x12, 0x34, 0x06, 0x00, 0x12, 0x04, 0x21];
    let err = PartyAddress::parse(&data).unwrap_err();
    assert_eq!(err, SccpError::LengthMismatch { declared: 3, consumed: 8 });
    assert_eq!(err.info_length(), Some(-4));
}

#[test]
fn every_truncation_is_rejected() -> anyhow::Result<()> {
    init_tracing();

    let gt = GlobalTitle::e164("447700900123")?;
    let addr = PartyAddress::new(AddressIndicator::new(true, true, 4, true), 0x0123, 8, gt)?;
    let wire = addr.encode()?;

    for cut in 0..wire.len() {
        match PartyAddress::parse(&wire[..cut]) {
            Err(SccpError::TruncatedInput { .. }) => {}
            other => panic!("cut at {}: {:?}", cut, other),
        }
    }
    assert_eq!(PartyAddress::parse(&wire)?, addr);
    Ok(())
}

#[test]
fn point_code_addressing() -> anyhow::Result<()> {
    init_tracing();

    let pc = PointCode::itu(1, 2, 3);
    let addr = PartyAddress::from_ssn_pc(ssn::MSC, pc)?;
    let parsed = PartyAddress::parse(&addr.encode()?)?;

    assert!(!parsed.route_on_gt());
    assert!(parsed.has_point_code());
    assert_eq!(PointCode(parsed.point_code), pc);
    assert_eq!(parsed.digits(), "");
    Ok(())
}

#[test]
fn local_address_from_config() -> anyhow::Result<()> {
    init_tracing();

    let path = std::env::temp_dir().join(format!("brivas-sccp-{}.json", std::process::id()));
    std::fs::write(
        &path,
        r#"{"local_ssn": 147, "global_title": "2348012345678", "gti": 4, "nature_of_address": 4}"#,
    )?;
    let config = SccpConfig::from_file(&path);
    std::fs::remove_file(&path)?;

    let addr = config?.local_address()?;
    assert_eq!(addr.subsystem_number, ssn::USSD);
    assert!(addr.route_on_gt());
    assert_eq!(addr.digits(), "2348012345678");

    let parsed = PartyAddress::parse(&addr.encode()?)?;
    assert_eq!(parsed, addr);
    Ok(())
}

#[test]
fn out_of_range_nibble_rejected_on_construction() {
    init_tracing();

    let gt = GlobalTitle {
        numbering_plan: 0x1F,
        ..Default::default()
    };
    let err = PartyAddress::new(AddressIndicator::new(false, false, 3, true), 0, 0, gt).unwrap_err();
    assert!(matches!(err, SccpError::FieldOutOfRange { field: "numbering_plan", .. }));
}
