use calamine::{Data, DataType};

pub fn label(row: &[Data]) -> Option<String> {
    row.first()
        .filter(|cell| !cell.is_empty())
        .and_then(DataType::as_string)
}

pub fn date_serial(row: &[Data]) -> Option<f64> {
    row.get(1).and_then(serial_number)
}

pub fn time_serial(row: &[Data]) -> Option<f64> {
    row.get(2).and_then(serial_number)
}

// Serial cells come through either as plain numbers or as
// date-formatted cells, depending on the workbook's cell styles.
fn serial_number(cell: &Data) -> Option<f64> {
    match cell {
        Data::Int(value) => Some(*value as f64),
        Data::Float(value) => Some(*value),
        Data::DateTime(value) => Some(value.as_f64()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_the_fixed_column_order() {
        let row = [
            Data::String("Tienda Centro".into()),
            Data::Float(45658.0),
            Data::Float(0.5),
        ];

        assert_eq!(label(&row).unwrap(), "Tienda Centro");
        assert_eq!(date_serial(&row).unwrap(), 45658.0);
        assert_eq!(time_serial(&row).unwrap(), 0.5);
    }

    #[test]
    fn accepts_integer_serials() {
        let row = [Data::String("x".into()), Data::Int(45658), Data::Int(0)];

        assert_eq!(date_serial(&row).unwrap(), 45658.0);
        assert_eq!(time_serial(&row).unwrap(), 0.0);
    }

    #[test]
    fn rejects_non_numeric_serials() {
        let row = [
            Data::String("x".into()),
            Data::String("mañana".into()),
            Data::Bool(true),
        ];

        assert_eq!(date_serial(&row), None);
        assert_eq!(time_serial(&row), None);
    }

    #[test]
    fn short_rows_have_no_serials() {
        let row = [Data::String("x".into())];

        assert_eq!(date_serial(&row), None);
        assert_eq!(time_serial(&row), None);
    }
}
