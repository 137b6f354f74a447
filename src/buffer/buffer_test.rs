use super::*;

#[test]
fn test_buffer_read_write() -> Result<()> {
    let mut b = PacketBuffer::new();
    b.write_u8(0xab)?;
    b.write_u16(0x1234)?;
    b.write_u32(0xdeadbeef)?;
    assert_eq!(b.pos(), 7);
    assert_eq!(b.as_bytes(), &[0xab, 0x12, 0x34, 0xde, 0xad, 0xbe, 0xef]);

    b.seek(0)?;
    assert_eq!(b.read()?, 0xab);
    assert_eq!(b.read_u16()?, 0x1234);
    assert_eq!(b.read_u32()?, 0xdeadbeef);
    assert_eq!(b.pos(), 7);

    Ok(())
}

#[test]
fn test_buffer_bounds() -> Result<()> {
    let mut b = PacketBuffer::new();
    b.buf[511] = 7;

    assert_eq!(b.get(511)?, 7);
    assert_eq!(b.get(512), Err(Error::ErrBufferOutOfRange));
    assert_eq!(b.get(1000), Err(Error::ErrBufferOutOfRange));

    b.seek(511)?;
    assert_eq!(b.read()?, 7);
    assert_eq!(b.pos(), 512);
    assert_eq!(b.read(), Err(Error::ErrBufferOutOfRange));
    assert_eq!(b.write_u8(1), Err(Error::ErrBufferOutOfRange));

    assert!(b.get_range(500, 11).is_ok());
    assert_eq!(b.get_range(510, 3), Err(Error::ErrBufferOutOfRange));
    assert_eq!(b.get_range(511, 1), Err(Error::ErrBufferOutOfRange));

    Ok(())
}

#[test]
fn test_buffer_multi_byte_bounds() -> Result<()> {
    let mut b = PacketBuffer::new();

    b.seek(510)?;
    assert_eq!(b.read_u32(), Err(Error::ErrBufferOutOfRange));

    b.seek(510)?;
    assert!(b.read_u16().is_ok());

    b.seek(509)?;
    assert_eq!(b.write_u32(1), Err(Error::ErrBufferOutOfRange));
    assert_eq!(b.pos(), 509, "a failed write must not move the cursor");

    b.seek(510)?;
    b.write_u16(0xffff)?;
    assert_eq!(b.pos(), 512);

    Ok(())
}

#[test]
fn test_buffer_seek_step() -> Result<()> {
    let mut b = PacketBuffer::new();
    b.step(12)?;
    assert_eq!(b.pos(), 12);
    b.step(500)?;
    assert_eq!(b.pos(), 512);
    assert_eq!(b.step(1), Err(Error::ErrBufferOutOfRange));
    assert_eq!(b.seek(513), Err(Error::ErrBufferOutOfRange));
    b.seek(3)?;
    assert_eq!(b.pos(), 3);

    Ok(())
}

#[test]
fn test_buffer_set_u16() -> Result<()> {
    let mut b = PacketBuffer::new();
    b.write_u16(0)?;
    b.write_u8(9)?;
    b.set_u16(0, 0x0102)?;
    assert_eq!(b.as_bytes(), &[0x01, 0x02, 9]);
    assert_eq!(b.pos(), 3);

    assert!(b.set_u16(510, 1).is_ok());
    assert_eq!(b.set_u16(511, 1), Err(Error::ErrBufferOutOfRange));

    Ok(())
}

#[test]
fn test_buffer_from_bytes() -> Result<()> {
    let b = PacketBuffer::from_bytes(&[1, 2, 3])?;
    assert_eq!(b.pos(), 0);
    assert_eq!(b.get_range(0, 3)?, &[1, 2, 3]);
    assert_eq!(b.get(3)?, 0);

    let result = PacketBuffer::from_bytes(&[0; PACKET_SIZE + 1]);
    assert_eq!(result.unwrap_err(), Error::ErrMessageTooLong);

    Ok(())
}

#[test]
fn test_buffer_from_bytes_stops_reads_at_datagram_end() -> Result<()> {
    let mut b = PacketBuffer::from_bytes(&[0xab, 0xcd, 0xef])?;
    assert_eq!(b.read_u16()?, 0xabcd);
    assert_eq!(b.read_u16(), Err(Error::ErrBufferOutOfRange));

    b.seek(1)?;
    assert_eq!(b.step(3), Err(Error::ErrBufferOutOfRange));
    assert_eq!(b.pos(), 1);
    b.step(2)?;
    assert_eq!(b.read(), Err(Error::ErrBufferOutOfRange));

    // The padding stays reachable for random access.
    assert_eq!(b.get(3)?, 0);

    Ok(())
}
