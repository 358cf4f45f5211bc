use contracts::domain::a002_customer::aggregate::CustomerDto;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CustomerFormState {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl CustomerFormState {
    /// Trimmed DTO; a blank email is sent as absent
    pub fn to_dto(&self) -> Result<CustomerDto, String> {
        let email = self.email.trim();
        let dto = CustomerDto {
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: (!email.is_empty()).then(|| email.to_string()),
        };
        dto.validate()?;
        Ok(dto)
    }
}
