use super::Zip as ZipTrait;

impl<I> ZipTrait for Vec<I>
where
    I: IntoIterator,
{
    type Row = Vec<Option<I::Item>>;

    fn zip(self) -> Vec<Self::Row> {
        // Fused so a column that has ended cannot yield again in later rows.
        let mut columns: Vec<_> = self
            .into_iter()
            .map(|column| column.into_iter().fuse())
            .collect();
        let mut rows = Vec::new();
        loop {
            let row: Vec<_> = columns.iter_mut().map(Iterator::next).collect();
            if row.iter().all(Option::is_none) {
                break rows;
            }
            rows.push(row);
        }
    }
}
