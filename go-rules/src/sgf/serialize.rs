use super::types::{GameInfo, GameRecord, Setup};

/// Write a record back out as a single main-line SGF game tree.
pub fn serialize(record: &GameRecord) -> String {
    let mut buf = String::from("(;GM[1]FF[4]");
    write_info(&record.info, &mut buf);
    write_setup(&record.setup, 0, &mut buf);

    for m in &record.moves {
        buf.push(';');
        buf.push_str(m.stone.letter());
        buf.push('[');
        push_escaped(&mut buf, &m.notation);
        buf.push(']');
        write_setup(&record.setup, m.number, &mut buf);
    }

    buf.push(')');
    buf
}

fn write_info(info: &GameInfo, buf: &mut String) {
    write_value("SZ", &info.board_size.to_string(), buf);

    let texts = [
        ("PB", &info.black_name),
        ("BR", &info.black_rank),
        ("PW", &info.white_name),
        ("WR", &info.white_rank),
        ("GN", &info.game_name),
        ("EV", &info.event),
        ("RO", &info.round),
        ("DT", &info.date),
        ("PC", &info.place),
        ("RU", &info.rules),
        ("RE", &info.result),
        ("OT", &info.overtime),
    ];
    for (ident, value) in texts {
        if let Some(v) = value {
            write_value(ident, v, buf);
        }
    }

    if let Some(k) = info.komi {
        write_value("KM", &k.to_string(), buf);
    }
    if let Some(h) = info.handicap {
        write_value("HA", &h.to_string(), buf);
    }
    if let Some(t) = info.time_limit_secs {
        write_value("TM", &t.to_string(), buf);
    }
}

/// Setup entries applying after `after_move` moves, one property per run of equal signs.
fn write_setup(setup: &[Setup], after_move: u32, buf: &mut String) {
    let mut current = None;
    for s in setup.iter().filter(|s| s.after_move == after_move) {
        if current != Some(s.sign) {
            buf.push_str(match s.sign {
                1 => "AB",
                -1 => "AW",
                _ => "AE",
            });
            current = Some(s.sign);
        }
        buf.push('[');
        push_escaped(buf, &s.notation);
        buf.push(']');
    }
}

fn write_value(ident: &str, value: &str, buf: &mut String) {
    buf.push_str(ident);
    buf.push('[');
    push_escaped(buf, value);
    buf.push(']');
}

fn push_escaped(buf: &mut String, s: &str) {
    for ch in s.chars() {
        if ch == ']' || ch == '\\' {
            buf.push('\\');
        }
        buf.push(ch);
    }
}

#[cfg(test)]
mod tests {
    use super::super::parse;
    use super::*;

    #[test]
    fn writes_main_line() {
        let record = parse("(;SZ[9]PB[Alice]PW[Bob];B[ee];W[ge];B[])").unwrap();
        assert_eq!(
            serialize(&record),
            "(;GM[1]FF[4]SZ[9]PB[Alice]PW[Bob];B[ee];W[ge];B[])"
        );
    }

    #[test]
    fn round_trip_game_info() {
        let input = "(;SZ[19]PB[Lee Sedol]PW[AlphaGo]BR[9p]WR[9p]RE[W+R]\
                     EV[Google DeepMind Challenge]DT[2016-03-09]KM[7.5]HA[0]RU[Chinese]TM[7200])";
        let record = parse(input).unwrap();
        assert_eq!(parse(&serialize(&record)).unwrap(), record);
    }

    #[test]
    fn round_trip_escapes() {
        let record = parse(r"(;GN[a \] b \\ c];B[aa])").unwrap();
        let output = serialize(&record);
        assert!(output.contains(r"GN[a \] b \\ c]"));
        assert_eq!(parse(&output).unwrap(), record);
    }

    #[test]
    fn round_trip_setup() {
        let input = "(;SZ[9]AB[aa:bb]AW[cc]AB[dd];B[ee]AE[aa];W[ff])";
        let record = parse(input).unwrap();
        let output = serialize(&record);
        assert!(output.contains(";B[ee]AE[aa];W[ff]"));
        assert_eq!(parse(&output).unwrap(), record);
    }

    #[test]
    fn komi_keeps_decimal() {
        let record = parse("(;KM[0.5])").unwrap();
        assert!(serialize(&record).contains("KM[0.5]"));
    }
}
